//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::state::{FilterCriteria, PriceRange, SortKey};
use crate::theme::Settings;

/// watchdeck - browse a remote watch catalog from the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "watchdeck")]
#[command(version)]
#[command(about = "Browse, filter and inspect a remote watch catalog in the terminal", long_about = None)]
pub struct Args {
    /// Item list endpoint (overrides `source_url` in settings.conf)
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Settings file (default: ~/.config/watchdeck/settings.conf)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the filtered catalog and exit instead of starting the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Case-insensitive text matched against name and brand (use with --list)
    #[arg(short, long, requires = "list")]
    pub query: Option<String>,

    /// Exact brand to keep (use with --list)
    #[arg(long, requires = "list")]
    pub brand: Option<String>,

    /// Exact country to keep (use with --list)
    #[arg(long, requires = "list")]
    pub country: Option<String>,

    /// Lowest price to keep, inclusive (use with --list)
    #[arg(long, requires = "list")]
    pub min_price: Option<u64>,

    /// Highest price to keep, inclusive (use with --list)
    #[arg(long, requires = "list")]
    pub max_price: Option<u64>,

    /// Sort order: relevance, price-asc, price-desc, year-asc, year-desc
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortKey>,

    /// Number of pages to reveal (the first page plus load-mores) (use with --list)
    #[arg(long, default_value_t = 1, requires = "list")]
    pub pages: usize,

    /// Print JSON instead of a table (use with --list)
    #[arg(long, requires = "list")]
    pub json: bool,
}

/// Parse a `--sort` value.
fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::parse_key(s).ok_or_else(|| {
        format!("unknown sort key '{s}' (relevance, price-asc, price-desc, year-asc, year-desc)")
    })
}

/// What: Apply command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Settings loaded from file; updated in place
///
/// Details:
/// - `--source-url` replaces the endpoint; `--sort` becomes the initial sort of the session.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(url) = &args.source_url {
        tracing::info!(url = %url, "source url overridden from command line");
        settings.source_url.clone_from(url);
    }
    if let Some(sort) = args.sort {
        settings.browser.initial_sort = sort;
    }
}

/// What: Build the filter criteria requested for `--list`.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Effective settings (default price ceiling and sort)
///
/// Output:
/// - Criteria with every unspecified field at its default.
#[must_use]
pub fn list_criteria(args: &Args, settings: &Settings) -> FilterCriteria {
    let mut criteria = FilterCriteria::with_price_max(settings.browser.price_default_max);
    if let Some(q) = &args.query {
        criteria.query.clone_from(q);
    }
    if let Some(b) = &args.brand {
        criteria.brand.clone_from(b);
    }
    if let Some(c) = &args.country {
        criteria.country.clone_from(c);
    }
    criteria.price = PriceRange::new(
        args.min_price.unwrap_or(criteria.price.min),
        args.max_price.unwrap_or(criteria.price.max),
    );
    criteria.sort = args.sort.unwrap_or(settings.browser.initial_sort);
    criteria
}
