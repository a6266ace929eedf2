use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources on exit.
///
/// Details:
/// - Stops the input thread and closes the catalog channel so a late outcome is dropped
///   instead of being applied to a torn-down state.
pub fn cleanup_on_exit(app: &AppState, channels: &mut Channels) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    channels.catalog_rx.close();
    channels.tick_rx.close();
    tracing::info!(
        loaded = app.browser.catalog.is_loaded(),
        shown = app.browser.visible().len(),
        "watchdeck exiting"
    );
}
