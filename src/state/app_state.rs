//! Central UI state for the TUI, wrapping the browser state.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::logic::{BrowserState, ScrollMetrics, ScrollTrigger};
use crate::state::Watch;
use crate::theme::{KeyMap, Settings};

/// Terminal lines used by one result card.
pub const CARD_LINES: u16 = 2;

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Query text box.
    #[default]
    Search,
    /// Brand/country/price/sort selectors.
    Filters,
    /// Result cards.
    Results,
}

impl Focus {
    /// Next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Filters,
            Self::Filters => Self::Results,
            Self::Results => Self::Search,
        }
    }

    /// Previous pane in Tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Filters => Self::Search,
            Self::Results => Self::Filters,
        }
    }
}

/// Selector row highlighted in the filters pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    /// Brand selector.
    #[default]
    Brand,
    /// Country selector.
    Country,
    /// Max-price slider.
    MaxPrice,
    /// Sort selector.
    Sort,
}

impl FilterField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Brand, Self::Country, Self::MaxPrice, Self::Sort];

    /// Field below this one; wraps.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Brand => Self::Country,
            Self::Country => Self::MaxPrice,
            Self::MaxPrice => Self::Sort,
            Self::Sort => Self::Brand,
        }
    }

    /// Field above this one; wraps.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Brand => Self::Sort,
            Self::Country => Self::Brand,
            Self::MaxPrice => Self::Country,
            Self::Sort => Self::MaxPrice,
        }
    }
}

/// Global application state shared by the event handlers and the renderer.
#[derive(Debug)]
pub struct AppState {
    /// Catalog, criteria, window and selection.
    pub browser: BrowserState,
    /// Focused pane.
    pub focus: Focus,
    /// Highlighted selector in the filters pane.
    pub filter_field: FilterField,
    /// Cursor and scroll offset of the result cards.
    pub list_state: ListState,
    /// Help overlay visibility.
    pub show_help: bool,
    /// Global key bindings.
    pub keymap: KeyMap,
    /// Increment of the max-price slider.
    pub price_slider_step: u64,
    /// Bounded-rate near-bottom detector.
    pub scroll_trigger: ScrollTrigger,
    /// Results area from the last frame, for mouse hit-testing.
    pub results_rect: Option<Rect>,
    /// Lines available to result cards in the last frame.
    pub results_viewport_lines: u16,
    /// Where the catalog comes from (shown in the footer).
    pub source_label: String,
}

impl AppState {
    /// Build the UI state from settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            browser: BrowserState::new(settings.browser.clone()),
            focus: Focus::default(),
            filter_field: FilterField::default(),
            list_state: ListState::default(),
            show_help: false,
            keymap: settings.keymap.clone(),
            price_slider_step: settings.price_slider_step,
            scroll_trigger: ScrollTrigger::new(
                settings.near_bottom_threshold,
                settings.scroll_throttle,
            ),
            results_rect: None,
            results_viewport_lines: 0,
            source_label: settings.source_url.clone(),
        }
    }

    /// Item under the results cursor.
    #[must_use]
    pub fn cursor_item(&self) -> Option<&Watch> {
        self.list_state
            .selected()
            .and_then(|i| self.browser.visible().get(i))
    }

    /// What: Move the results cursor by `delta` cards, clamped to the visible window.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.browser.visible().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
    }

    /// Jump the cursor to the first or last visible card.
    pub fn cursor_to_edge(&mut self, end: bool) {
        let len = self.browser.visible().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(if end { len - 1 } else { 0 }));
        }
    }

    /// Keep the cursor inside the window after the filtered list changed.
    pub fn clamp_cursor(&mut self) {
        let len = self.browser.visible().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Cards that fit in the results viewport (at least one).
    #[must_use]
    pub fn cards_per_page(&self) -> usize {
        usize::from((self.results_viewport_lines / CARD_LINES).max(1))
    }

    /// What: Current scroll geometry of the results, in terminal lines.
    ///
    /// Details:
    /// - The offset is the larger of the last rendered offset and the offset needed to keep
    ///   the cursor on screen, so it reflects cursor moves made since the last frame.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let card = u32::from(CARD_LINES);
        let viewport = u32::from(self.results_viewport_lines);
        let content = self.browser.visible().len() as u32 * card;
        let cursor_bottom = self.list_state.selected().map_or(0, |i| (i as u32 + 1) * card);
        let needed = cursor_bottom.saturating_sub(viewport);
        let rendered = self.list_state.offset() as u32 * card;
        ScrollMetrics {
            viewport,
            offset: rendered.max(needed),
            content,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
