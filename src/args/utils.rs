//! Shared utilities for argument processing.

use super::definition::Args;

/// What: Determine the log filter directive from command-line arguments.
///
/// Output:
/// - `"debug"` with `--verbose`, otherwise the `--log-level` value.
///
/// Details:
/// - `RUST_LOG`, when set, still wins at subscriber construction time.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
