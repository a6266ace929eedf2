use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::LoadOutcome;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events come from the input thread, the catalog outcome from the one-shot loader
///   task and ticks from the redraw timer.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Sender handed to the catalog loader.
    pub catalog_tx: mpsc::UnboundedSender<LoadOutcome>,
    /// Catalog outcome consumed by the loop (at most one message).
    pub catalog_rx: mpsc::UnboundedReceiver<LoadOutcome>,
    /// Sender handed to the tick timer.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Redraw ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all runtime channels.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel::<LoadOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            catalog_tx,
            catalog_rx,
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
