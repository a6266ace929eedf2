use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::TerminalGuard;

mod background;
mod channels;
mod cleanup;
mod event_loop;

use background::{spawn_event_thread, spawn_tick, start_catalog_load};
use channels::Channels;
use cleanup::cleanup_on_exit;
pub use event_loop::LoopExit;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment switch that runs without a terminal (used by the smoke test).
pub const HEADLESS_ENV: &str = "WATCHDECK_TEST_HEADLESS";

/// Inputs for one interactive session.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Effective settings (file values with command-line overrides applied).
    pub settings: Settings,
    /// Redraw interval.
    pub tick: Duration,
}

impl RunOptions {
    /// Options with the default redraw interval.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tick: Duration::from_millis(250),
        }
    }
}

/// What: Run the browser end-to-end: terminal setup, catalog load, event loop, teardown.
///
/// Inputs:
/// - `options`: Settings and redraw interval.
///
/// Output:
/// - `Ok(exit)` when the UI exits cleanly; `Err` on terminal errors.
///
/// Details:
/// - With `WATCHDECK_TEST_HEADLESS=1` no terminal is touched, no input thread is started and
///   the loop returns as soon as the catalog outcome has been applied.
/// - The catalog fetch never fails the run; a failed load leaves an empty catalog.
pub async fn run(options: RunOptions) -> Result<LoopExit> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let guard = TerminalGuard::acquire(headless)?;
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(&options.settings);
    let mut channels = Channels::new();

    start_catalog_load(&options.settings, channels.catalog_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    if !headless {
        spawn_tick(channels.tick_tx.clone(), options.tick);
    }

    let exit = run_event_loop(&mut terminal, &mut app, &mut channels, headless).await;
    cleanup_on_exit(&app, &mut channels);

    drop(terminal);
    guard.release()?;
    Ok(exit)
}
