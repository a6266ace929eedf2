use ratatui::Terminal;
use tokio::select;

use crate::events::{dispatch, handle_event};
use crate::logic::Action;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// Why the event loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The user asked to quit.
    Quit,
    /// Headless run finished once the catalog settled.
    CatalogSettled,
    /// Every input channel closed.
    Disconnected,
}

/// What: Wait for one message from any channel and apply it.
///
/// Output:
/// - `Some(exit)` when the loop should stop, `None` to keep going.
async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    headless: bool,
) -> Option<LoopExit> {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            handle_event(ev, app).then_some(LoopExit::Quit)
        }
        Some(outcome) = channels.catalog_rx.recv() => {
            dispatch(app, Action::CatalogLoaded(outcome));
            tracing::debug!(
                catalog = app.browser.catalog.len(),
                filtered = app.browser.filtered.len(),
                "catalog settled"
            );
            headless.then_some(LoopExit::CatalogSettled)
        }
        Some(()) = channels.tick_rx.recv() => None,
        else => Some(LoopExit::Disconnected),
    }
}

/// What: Render and process messages until the user quits.
///
/// Inputs:
/// - `terminal`: Terminal to draw on (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Runtime channels
/// - `headless`: Whether the run has no terminal
///
/// Output:
/// - The reason the loop stopped.
///
/// Details:
/// - Draw failures are logged and do not stop the loop.
pub async fn run_event_loop<B>(
    terminal: &mut Option<Terminal<B>>,
    app: &mut AppState,
    channels: &mut Channels,
    headless: bool,
) -> LoopExit
where
    B: ratatui::backend::Backend,
{
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "frame draw failed");
        }
        if let Some(exit) = process_channel_messages(app, channels, headless).await {
            tracing::debug!(?exit, "event loop finished");
            return exit;
        }
    }
}
