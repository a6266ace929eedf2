use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{HttpItemSource, ItemSource, LoadOutcome, load_catalog};
use crate::theme::Settings;

/// What: Spawn the one-shot catalog loader.
///
/// Inputs:
/// - `source`: Item source to fetch from
/// - `catalog_tx`: Channel receiving the single [`LoadOutcome`]
///
/// Details:
/// - The outcome is sent exactly once; a closed channel (app already exited) is ignored.
pub fn spawn_catalog_loader<S>(source: S, catalog_tx: mpsc::UnboundedSender<LoadOutcome>)
where
    S: ItemSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = load_catalog(&source).await;
        if catalog_tx.send(outcome).is_err() {
            tracing::debug!("catalog outcome dropped; runtime already exited");
        }
    });
}

/// What: Build the HTTP source from settings and start loading.
///
/// Details:
/// - A source that cannot even be constructed degrades the same way as a failed fetch.
pub fn start_catalog_load(settings: &Settings, catalog_tx: mpsc::UnboundedSender<LoadOutcome>) {
    match HttpItemSource::new(&settings.source_url, settings.request_timeout) {
        Ok(source) => spawn_catalog_loader(source, catalog_tx),
        Err(e) => {
            tracing::error!(url = %settings.source_url, error = %e, "cannot build item source");
            let _ = catalog_tx.send(LoadOutcome::Failed(e.to_string()));
        }
    }
}

/// What: Spawn the periodic redraw tick.
///
/// Details:
/// - Stops as soon as the receiving side is gone.
pub fn spawn_tick(tick_tx: mpsc::UnboundedSender<()>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the terminal input thread.
///
/// Inputs:
/// - `headless`: When `true`, nothing is spawned
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls; set on exit
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is honoured promptly. This is the
///   "unsubscribe on teardown" of the scroll listener: once the flag is set no further
///   wheel or key events reach the loop.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("input thread stopped");
    });
}
