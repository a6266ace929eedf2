use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::logic::BrowserConfig;
use crate::sources::DEFAULT_SOURCE_URL;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels and modals.
    pub mantle: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for borders of unfocused panes.
    pub surface2: Color,
    /// Muted color for labels and captions.
    pub overlay1: Color,
    /// Secondary muted color for hints.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for the focused pane border and the search prompt.
    pub sapphire: Color,
    /// Accent for headings and modal borders.
    pub mauve: Color,
    /// Prices.
    pub pink: Color,
    /// Positive state color.
    pub green: Color,
    /// Attention color (load-more hint).
    pub yellow: Color,
    /// Selection highlight background.
    pub lavender: Color,
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord for `code` with `mods`.
    #[must_use]
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Return a short display label such as "Ctrl+R" or "F1".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".into());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".into());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".into());
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            other => format!("{other:?}"),
        };
        parts.push(key);
        parts.join("+")
    }

    /// Whether a key event with `code` and `mods` triggers this chord.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.code == code && self.mods == mods
    }
}

/// Global key bindings; every action accepts any of its chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Leave the application.
    pub quit: Vec<KeyChord>,
    /// Toggle the help overlay.
    pub help: Vec<KeyChord>,
    /// Reveal the next page of results.
    pub load_more: Vec<KeyChord>,
    /// Restore default filters.
    pub reset: Vec<KeyChord>,
    /// Apply the quick price cap.
    pub quick_filter: Vec<KeyChord>,
    /// Cycle the sort key.
    pub sort_next: Vec<KeyChord>,
}

impl KeyMap {
    /// `true` when any chord in `list` matches the event.
    #[must_use]
    pub fn any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        list.iter().any(|c| c.matches(code, mods))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let ctrl = |c| KeyChord::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        Self {
            quit: vec![ctrl('c')],
            help: vec![KeyChord::new(KeyCode::F(1), KeyModifiers::NONE)],
            load_more: vec![ctrl('l')],
            reset: vec![ctrl('r')],
            quick_filter: vec![ctrl('f')],
            sort_next: vec![ctrl('s')],
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Endpoint returning the JSON item list.
    pub source_url: String,
    /// Overall request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Pipeline tunables.
    pub browser: BrowserConfig,
    /// Near-bottom distance, in terminal lines.
    pub near_bottom_threshold: u32,
    /// Minimum spacing between two scroll-driven load-mores.
    pub scroll_throttle: Duration,
    /// Increment of the max-price slider.
    pub price_slider_step: u64,
    /// Key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            request_timeout: None,
            browser: BrowserConfig::default(),
            near_bottom_threshold: crate::logic::pagination::DEFAULT_NEAR_BOTTOM_THRESHOLD,
            scroll_throttle: crate::logic::pagination::DEFAULT_SCROLL_THROTTLE,
            price_slider_step: 5_000,
            keymap: KeyMap::default(),
        }
    }
}
