//! Headless listing: fetch once, run the pipeline, print the revealed window.

use std::io::Write;

use crate::logic::{Action, BrowserConfig, BrowserState};
use crate::sources::{HttpItemSource, LoadOutcome, load_catalog};
use crate::state::FilterCriteria;
use crate::theme::Settings;
use crate::ui::EMPTY_MESSAGE;
use crate::ui::format::{format_price, truncate_to_width};

use super::definition::{Args, list_criteria};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Drive a browser state the same way the TUI would for a listing.
///
/// Inputs:
/// - `config`: Browser configuration
/// - `outcome`: Result of the catalog fetch
/// - `criteria`: Requested filters
/// - `pages`: Pages to reveal; the first page is always shown
///
/// Output:
/// - The browser state after the catalog, criteria and `pages - 1` load-mores were applied.
#[must_use]
pub fn build_listing(
    config: BrowserConfig,
    outcome: LoadOutcome,
    criteria: FilterCriteria,
    pages: usize,
) -> BrowserState {
    let mut state = BrowserState::new(config);
    state.apply(Action::CatalogLoaded(outcome));
    state.apply(Action::SetQuery(criteria.query));
    state.apply(Action::SetBrand(criteria.brand));
    state.apply(Action::SetCountry(criteria.country));
    state.apply(Action::SetPriceRange(criteria.price));
    state.apply(Action::SetSort(criteria.sort));
    for _ in 1..pages {
        state.apply(Action::LoadMore);
    }
    state
}

/// What: Print the revealed window as a table or JSON.
///
/// Inputs:
/// - `state`: Browser state to print
/// - `json`: Emit a JSON array instead of a table
/// - `out`: Destination
///
/// Details:
/// - Table mode prints the empty message when nothing matches (including a failed load);
///   JSON mode prints an empty array.
pub fn write_listing(state: &BrowserState, json: bool, out: &mut impl Write) -> Result<()> {
    let window = state.visible();
    if json {
        serde_json::to_writer_pretty(&mut *out, window)?;
        writeln!(out)?;
        return Ok(());
    }
    if window.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    writeln!(out, "Showing {} results", state.filtered.len())?;
    for w in window {
        writeln!(
            out,
            "{:>4}  {:<40}  {:<18}  {:>12}  {}",
            w.id,
            truncate_to_width(&w.name, 40),
            truncate_to_width(&w.brand, 18),
            format_price(w.price_usd),
            w.year
        )?;
    }
    let remaining = state.pagination.remaining(state.filtered.len());
    if remaining > 0 {
        writeln!(out, "Load more ({remaining} remaining): pass --pages to reveal more")?;
    }
    Ok(())
}

/// What: Handle `--list`: fetch, filter and print to stdout.
///
/// Output:
/// - `Ok(())` also when the source is unavailable (the catalog degrades to empty).
pub async fn run_list(args: &Args, settings: &Settings) -> Result<()> {
    let outcome = match HttpItemSource::new(&settings.source_url, settings.request_timeout) {
        Ok(source) => load_catalog(&source).await,
        Err(e) => {
            tracing::error!(url = %settings.source_url, error = %e, "cannot build item source");
            LoadOutcome::Failed(e.to_string())
        }
    };
    let criteria = list_criteria(args, settings);
    tracing::info!(?criteria, pages = args.pages, "listing catalog");
    let state = build_listing(settings.browser.clone(), outcome, criteria, args.pages);
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_listing(&state, args.json, &mut lock)?;
    lock.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SortKey, Watch};

    fn catalog(n: u32) -> Vec<Watch> {
        (1..=n)
            .map(|i| Watch {
                id: i,
                name: format!("Item {i}"),
                brand: if i % 3 == 0 { "electronics" } else { "jewelery" }.into(),
                country: "Global".into(),
                price_usd: u64::from(30 - i) * 100,
                year: 2020,
                image: String::new(),
            })
            .collect()
    }

    #[test]
    /// What: Pages, filters and sort shape the printed window.
    ///
    /// - Input: 25 items, brand jewelery (17 matches), price-asc, 2 pages
    /// - Output: 17 rows revealed, cheapest first, no load-more line
    fn listing_respects_criteria_and_pages() {
        let mut criteria = FilterCriteria::default();
        criteria.brand = "jewelery".into();
        criteria.sort = SortKey::PriceAsc;
        let state = build_listing(
            BrowserConfig::default(),
            LoadOutcome::Loaded(catalog(25)),
            criteria,
            2,
        );
        assert_eq!(state.filtered.len(), 17);
        assert_eq!(state.visible().len(), 17);
        assert_eq!(state.visible()[0].id, 25);

        let mut buf = Vec::new();
        write_listing(&state, false, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("Showing 17 results"));
        assert!(!text.contains("Load more"));
    }

    #[test]
    /// What: A failed load prints the empty message, or `[]` in JSON mode.
    fn failed_load_prints_empty() {
        let state = build_listing(
            BrowserConfig::default(),
            LoadOutcome::Failed("offline".into()),
            FilterCriteria::default(),
            1,
        );
        let mut buf = Vec::new();
        write_listing(&state, false, &mut buf).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8").trim(), EMPTY_MESSAGE);

        let mut buf = Vec::new();
        write_listing(&state, true, &mut buf).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8").trim(), "[]");
    }

    #[test]
    /// What: JSON output carries the record fields and the remaining count shows in tables.
    fn json_and_remaining() {
        let state = build_listing(
            BrowserConfig::default(),
            LoadOutcome::Loaded(catalog(20)),
            FilterCriteria::default(),
            1,
        );
        let mut buf = Vec::new();
        write_listing(&state, true, &mut buf).expect("write");
        let parsed: Vec<Watch> = serde_json::from_slice(&buf).expect("json");
        assert_eq!(parsed.len(), 12);
        assert_eq!(parsed[0].id, 1);

        let mut buf = Vec::new();
        write_listing(&state, false, &mut buf).expect("write");
        assert!(String::from_utf8(buf).expect("utf8").contains("Load more (8 remaining)"));
    }
}
