//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod utils;

pub use definition::{Args, apply_overrides, list_criteria};
pub use list::{build_listing, run_list, write_listing};
pub use utils::determine_log_level;
