//! Interactive runtime: terminal lifecycle, background tasks and the event loop.

/// Event loop, channels and background tasks.
mod runtime;
/// Terminal setup and restoration.
mod terminal;

pub use runtime::{HEADLESS_ENV, LoopExit, RunOptions, run};
