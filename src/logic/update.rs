//! Browser state and its single update entry point.

use crate::sources::LoadOutcome;
use crate::state::{DEFAULT_PRICE_MAX, FilterCriteria, PriceRange, SortKey, Watch};

use super::catalog::Catalog;
use super::filter::filter_and_sort;
use super::options::{brand_options, country_options};
use super::pagination::{DEFAULT_INITIAL_VISIBLE, DEFAULT_PAGE_STEP, Pagination};
use super::selection::Selection;

/// Upper end of the max-price slider.
pub const DEFAULT_SLIDER_MAX: u64 = 200_000;
/// Cap applied by the quick price filter.
pub const DEFAULT_QUICK_PRICE_CAP: u64 = 5_000;

/// Tunables of the browsing pipeline, sourced from settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Window size before any load-more.
    pub initial_visible: usize,
    /// Items added per load-more.
    pub page_step: usize,
    /// Upper price bound restored by a reset.
    pub price_default_max: u64,
    /// Largest value the max-price slider accepts.
    pub slider_max: u64,
    /// Upper bound set by the quick price filter.
    pub quick_price_cap: u64,
    /// Rewind the window whenever the criteria change.
    pub reset_window_on_filter_change: bool,
    /// Sort key applied at startup.
    pub initial_sort: SortKey,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            page_step: DEFAULT_PAGE_STEP,
            price_default_max: DEFAULT_PRICE_MAX,
            slider_max: DEFAULT_SLIDER_MAX,
            quick_price_cap: DEFAULT_QUICK_PRICE_CAP,
            reset_window_on_filter_change: false,
            initial_sort: SortKey::Relevance,
        }
    }
}

/// State transitions of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the query text.
    SetQuery(String),
    /// Append one character to the query.
    PushQueryChar(char),
    /// Remove the last character of the query.
    PopQueryChar,
    /// Choose a brand (or `"All"`).
    SetBrand(String),
    /// Choose a country (or `"All"`).
    SetCountry(String),
    /// Set both price bounds.
    SetPriceRange(PriceRange),
    /// Slider: price becomes `[0, value]`, capped at the slider maximum.
    SetMaxPrice(u64),
    /// Choose the sort key.
    SetSort(SortKey),
    /// Quick filter: price becomes `[0, quick_price_cap]`.
    QuickPriceCap,
    /// Restore all criteria to their defaults.
    ResetFilters,
    /// Explicit load-more.
    LoadMore,
    /// Scroll reached the bottom area of the results.
    NearBottom,
    /// Open the detail view on the rendered item with this id.
    Select(u32),
    /// Close the detail view.
    CloseDetail,
    /// The initial fetch completed.
    CatalogLoaded(LoadOutcome),
}

/// Everything the browser needs to render: catalog, derived options, criteria,
/// the revealed window and the selection.
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Full item list.
    pub catalog: Catalog,
    /// Brand selector options (recomputed on catalog change).
    pub brands: Vec<String>,
    /// Country selector options (recomputed on catalog change).
    pub countries: Vec<String>,
    /// Current filter and sort choices.
    pub criteria: FilterCriteria,
    /// Revealed window size.
    pub pagination: Pagination,
    /// Detail view.
    pub selection: Selection,
    /// Catalog after filtering and sorting.
    pub filtered: Vec<Watch>,
    /// Tunables.
    pub config: BrowserConfig,
}

impl BrowserState {
    /// Fresh state with an empty, not-yet-loaded catalog.
    #[must_use]
    pub fn new(config: BrowserConfig) -> Self {
        let mut criteria = FilterCriteria::with_price_max(config.price_default_max);
        criteria.sort = config.initial_sort;
        let mut s = Self {
            catalog: Catalog::default(),
            brands: Vec::new(),
            countries: Vec::new(),
            criteria,
            pagination: Pagination::new(config.initial_visible, config.page_step),
            selection: Selection::Closed,
            filtered: Vec::new(),
            config,
        };
        s.refresh_options();
        s
    }

    /// State over an already-loaded catalog.
    #[must_use]
    pub fn with_items(config: BrowserConfig, items: Vec<Watch>) -> Self {
        let mut s = Self::new(config);
        s.apply(Action::CatalogLoaded(LoadOutcome::Loaded(items)));
        s
    }

    /// The revealed prefix of the filtered list.
    #[must_use]
    pub fn visible(&self) -> &[Watch] {
        self.pagination.window(&self.filtered)
    }

    /// Whether a load-more affordance should be offered.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.pagination.has_more(self.filtered.len())
    }

    /// What: Apply one transition.
    ///
    /// Inputs:
    /// - `action`: The transition to perform.
    ///
    /// Details:
    /// - Criteria changes recompute `filtered`; by default the window size is kept as is.
    /// - `ResetFilters` does not touch the window or the selection.
    /// - `LoadMore` is a no-op once every filtered item is revealed; `NearBottom` always grows
    ///   the window, so a later, wider filter reveals what scrolling already paid for.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetQuery(q) => self.edit_criteria(|c| c.query = q),
            Action::PushQueryChar(ch) => self.edit_criteria(|c| c.query.push(ch)),
            Action::PopQueryChar => self.edit_criteria(|c| {
                c.query.pop();
            }),
            Action::SetBrand(b) => self.edit_criteria(|c| c.brand = b),
            Action::SetCountry(v) => self.edit_criteria(|c| c.country = v),
            Action::SetPriceRange(r) => self.edit_criteria(|c| c.price = r),
            Action::SetMaxPrice(v) => {
                let max = v.min(self.config.slider_max);
                self.edit_criteria(|c| c.price = PriceRange::new(0, max));
            }
            Action::SetSort(k) => self.edit_criteria(|c| c.sort = k),
            Action::QuickPriceCap => {
                let cap = self.config.quick_price_cap;
                self.edit_criteria(|c| c.price = PriceRange::new(0, cap));
            }
            Action::ResetFilters => {
                self.criteria = FilterCriteria::with_price_max(self.config.price_default_max);
                self.refresh_filtered();
            }
            Action::LoadMore => {
                if self.has_more() {
                    self.grow_window();
                }
            }
            Action::NearBottom => self.grow_window(),
            Action::Select(id) => {
                if let Some(w) = self.visible().iter().find(|w| w.id == id).cloned() {
                    self.selection.open(w);
                }
            }
            Action::CloseDetail => self.selection.close(),
            Action::CatalogLoaded(outcome) => {
                if self.catalog.apply_outcome(outcome) {
                    self.refresh_options();
                    self.refresh_filtered();
                }
            }
        }
    }

    /// Reveal one more page.
    fn grow_window(&mut self) {
        self.pagination.load_more();
        tracing::debug!(visible = self.pagination.visible(), "window grown");
    }

    /// Run `f` on the criteria, then re-derive the filtered list.
    fn edit_criteria(&mut self, f: impl FnOnce(&mut FilterCriteria)) {
        let before = self.criteria.clone();
        f(&mut self.criteria);
        if self.criteria == before {
            return;
        }
        if self.config.reset_window_on_filter_change {
            self.pagination.reset();
        }
        self.refresh_filtered();
    }

    fn refresh_options(&mut self) {
        self.brands = brand_options(self.catalog.items());
        self.countries = country_options(self.catalog.items());
    }

    fn refresh_filtered(&mut self) {
        self.filtered = filter_and_sort(self.catalog.items(), &self.criteria);
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: u32) -> Vec<Watch> {
        (1..=n)
            .map(|i| Watch {
                id: i,
                name: format!("Watch {i}"),
                brand: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                country: "Global".into(),
                price_usd: u64::from(i) * 1000,
                year: 2020 + u16::try_from(i % 5).unwrap_or(0),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    /// What: Loading fills options and the filtered list; a second load is ignored.
    fn load_populates_state_once() {
        let mut s = BrowserState::default();
        assert!(s.filtered.is_empty());
        assert_eq!(s.brands, vec!["All"]);
        s.apply(Action::CatalogLoaded(LoadOutcome::Loaded(catalog(3))));
        assert_eq!(s.filtered.len(), 3);
        assert_eq!(s.brands, vec!["All", "odd", "even"]);
        s.apply(Action::CatalogLoaded(LoadOutcome::Loaded(catalog(30))));
        assert_eq!(s.catalog.len(), 3);
    }

    #[test]
    /// What: A failed load leaves an empty, settled catalog.
    fn failed_load_degrades_to_empty() {
        let mut s = BrowserState::default();
        s.apply(Action::CatalogLoaded(LoadOutcome::Failed("offline".into())));
        assert!(s.catalog.is_loaded());
        assert!(s.filtered.is_empty());
        assert!(!s.has_more());
        s.apply(Action::SetQuery("x".into()));
        assert!(s.visible().is_empty());
    }

    #[test]
    /// What: Explicit load-more grows by the step and stops once everything is revealed.
    fn load_more_is_bounded_by_filtered_len() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(25));
        assert_eq!(s.visible().len(), 12);
        s.apply(Action::LoadMore);
        assert_eq!(s.visible().len(), 21);
        s.apply(Action::LoadMore);
        assert_eq!(s.pagination.visible(), 30);
        assert_eq!(s.visible().len(), 25);
        assert!(!s.has_more());
        s.apply(Action::LoadMore);
        assert_eq!(s.pagination.visible(), 30);
        s.apply(Action::NearBottom);
        assert_eq!(s.pagination.visible(), 39);
        assert_eq!(s.visible().len(), 25);
    }

    #[test]
    /// What: Scrolling under a narrow filter keeps growing the window for a wider one.
    ///
    /// - Input: 30 items, a brand with no matches, two near-bottom signals, then reset
    /// - Output: window 12 + 9 + 9 = 30, all 30 items shown after the reset
    fn near_bottom_grows_past_narrow_filter() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(30));
        s.apply(Action::SetBrand("few".into()));
        assert!(s.filtered.is_empty());
        s.apply(Action::NearBottom);
        s.apply(Action::NearBottom);
        assert_eq!(s.pagination.visible(), 30);
        s.apply(Action::ResetFilters);
        assert_eq!(s.visible().len(), 30);
        assert!(!s.has_more());
    }

    #[test]
    /// What: Filter changes keep the window size unless configured otherwise.
    fn window_survives_filter_changes_by_default() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(40));
        s.apply(Action::LoadMore);
        s.apply(Action::SetBrand("odd".into()));
        assert_eq!(s.pagination.visible(), 21);
        assert_eq!(s.visible().len(), 20);

        let cfg = BrowserConfig {
            reset_window_on_filter_change: true,
            ..BrowserConfig::default()
        };
        let mut s = BrowserState::with_items(cfg, catalog(40));
        s.apply(Action::LoadMore);
        s.apply(Action::SetBrand("odd".into()));
        assert_eq!(s.pagination.visible(), 12);
    }

    #[test]
    /// What: Reset restores criteria and leaves window and selection alone.
    fn reset_keeps_window_and_selection() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(30));
        s.apply(Action::LoadMore);
        s.apply(Action::Select(3));
        s.apply(Action::SetQuery("watch 1".into()));
        s.apply(Action::SetBrand("odd".into()));
        s.apply(Action::SetSort(SortKey::PriceDesc));
        s.apply(Action::QuickPriceCap);
        s.apply(Action::ResetFilters);
        assert_eq!(s.criteria, FilterCriteria::default());
        assert_eq!(s.pagination.visible(), 21);
        assert_eq!(s.selection.current().map(|w| w.id), Some(3));
        assert_eq!(s.filtered.len(), 30);
    }

    #[test]
    /// What: The slider caps at its maximum and the quick filter uses the configured cap.
    fn price_controls() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(10));
        s.apply(Action::SetMaxPrice(5_000_000));
        assert_eq!(s.criteria.price, PriceRange::new(0, DEFAULT_SLIDER_MAX));
        s.apply(Action::QuickPriceCap);
        assert_eq!(s.criteria.price, PriceRange::new(0, 5_000));
        assert_eq!(s.filtered.len(), 5);
        s.apply(Action::SetPriceRange(PriceRange::new(3_000, 4_000)));
        let ids: Vec<u32> = s.filtered.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    /// What: Only rendered items can be selected; close returns to `Closed`.
    fn selection_requires_visible_item() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(20));
        s.apply(Action::Select(15));
        assert!(!s.selection.is_open());
        s.apply(Action::Select(2));
        assert!(s.selection.is_open());
        s.apply(Action::CloseDetail);
        assert_eq!(s.selection, Selection::Closed);
    }

    #[test]
    /// What: Query editing actions push and pop characters.
    fn query_editing() {
        let mut s = BrowserState::with_items(BrowserConfig::default(), catalog(12));
        for ch in "watch 1".chars() {
            s.apply(Action::PushQueryChar(ch));
        }
        // "Watch 1", "Watch 10", "Watch 11", "Watch 12"
        assert_eq!(s.filtered.len(), 4);
        s.apply(Action::PopQueryChar);
        s.apply(Action::PopQueryChar);
        assert_eq!(s.criteria.query, "watch");
        assert_eq!(s.filtered.len(), 12);
    }
}
