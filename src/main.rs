//! watchdeck binary entrypoint kept minimal. The runtime lives in `watchdeck::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use watchdeck::args::{self, Args};
use watchdeck::{app, theme};

/// Local wall-clock timestamps for log lines, e.g. `2026-10-19T14:03:07`.
struct WatchdeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for WatchdeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// `RUST_LOG` when set, else the level chosen on the command line.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// What: Initialize tracing to `<config>/logs/watchdeck.log`, falling back to stderr.
///
/// Details:
/// - The file writer is non-blocking; its guard is parked in [`LOG_GUARD`] so buffered lines
///   are flushed at exit.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("watchdeck.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(WatchdeckTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(WatchdeckTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings_path = theme::resolve_settings_path(args.config.as_deref());
    let mut settings = theme::load_settings(&settings_path);
    args::apply_overrides(&args, &mut settings);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %settings.source_url,
        list = args.list,
        "watchdeck starting"
    );

    let result = if args.list {
        args::run_list(&args, &settings).await
    } else {
        app::run(app::RunOptions::new(settings)).await.map(|_| ())
    };
    if let Err(err) = result {
        tracing::error!(error = ?err, "application error");
        eprintln!("watchdeck: {err}");
        std::process::exit(1);
    }
    tracing::info!("watchdeck exited");
}
