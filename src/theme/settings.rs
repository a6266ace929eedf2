use std::fs;
use std::path::Path;
use std::time::Duration;

use super::parsing::{parse_bool, parse_key_chord, strip_inline_comment};
use super::types::{KeyChord, Settings};
use crate::state::SortKey;

/// Commented settings file written on first run.
pub const SETTINGS_SKELETON: &str = "\
# watchdeck settings
# Format: key = value. Lines starting with # or // are comments.

# Endpoint returning a JSON array of {title, category, price, image}
source_url = https://fakestoreapi.com/products
# Request timeout in seconds; 0 or unset waits indefinitely
# request_timeout_secs = 0

# Results window
initial_visible = 12
page_step = 9
# Lines from the bottom of the results that trigger the next page
near_bottom_threshold = 2
scroll_throttle_ms = 120

# Price controls (same unit as item prices)
price_default_max = 1000000
price_slider_max = 200000
price_slider_step = 5000
quick_price_cap = 5000

# Rewind the results window whenever a filter changes
reset_window_on_filter_change = false

# relevance | price-asc | price-desc | year-asc | year-desc
sort_mode = relevance

# Key bindings
keybind_quit = Ctrl+C
keybind_help = F1
keybind_load_more = Ctrl+L
keybind_reset = Ctrl+R
keybind_quick_filter = Ctrl+F
keybind_sort_next = Ctrl+S
";

/// What: Parse settings text into [`Settings`].
///
/// Inputs:
/// - `content`: File contents in `key = value` form.
///
/// Output:
/// - Parsed settings (defaults for anything absent) and one warning per rejected line.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are read as `_`.
/// - Invalid values keep the default.
#[must_use]
pub fn parse_settings(content: &str) -> (Settings, Vec<String>) {
    let mut out = Settings::default();
    let mut warnings = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            warnings.push(format!("line {}: missing '='", lineno + 1));
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        if let Err(msg) = apply_setting(&mut out, &key, val) {
            warnings.push(format!("line {}: {msg}", lineno + 1));
        }
    }
    (out, warnings)
}

fn num<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, String> {
    val.parse::<T>()
        .map_err(|_| format!("invalid number for {key}: '{val}'"))
}

fn chord(key: &str, val: &str) -> Result<Vec<KeyChord>, String> {
    parse_key_chord(val)
        .map(|c| vec![c])
        .ok_or_else(|| format!("invalid key chord for {key}: '{val}'"))
}

/// Apply one `key = value` pair to `out`.
fn apply_setting(out: &mut Settings, key: &str, val: &str) -> Result<(), String> {
    let b = &mut out.browser;
    match key {
        "source_url" | "api_url" => {
            if val.is_empty() {
                return Err("source_url is empty".into());
            }
            out.source_url = val.to_string();
        }
        "request_timeout_secs" => {
            let secs: u64 = num(key, val)?;
            out.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        "initial_visible" => b.initial_visible = num(key, val)?,
        "page_step" => {
            let step: usize = num(key, val)?;
            if step == 0 {
                return Err("page_step must be positive".into());
            }
            b.page_step = step;
        }
        "near_bottom_threshold" => out.near_bottom_threshold = num(key, val)?,
        "scroll_throttle_ms" => out.scroll_throttle = Duration::from_millis(num(key, val)?),
        "price_default_max" => b.price_default_max = num(key, val)?,
        "price_slider_max" => b.slider_max = num(key, val)?,
        "price_slider_step" => out.price_slider_step = num::<u64>(key, val)?.max(1),
        "quick_price_cap" => b.quick_price_cap = num(key, val)?,
        "reset_window_on_filter_change" => {
            b.reset_window_on_filter_change =
                parse_bool(val).ok_or_else(|| format!("invalid boolean for {key}: '{val}'"))?;
        }
        "sort_mode" | "sort" => {
            b.initial_sort =
                SortKey::parse_key(val).ok_or_else(|| format!("unknown sort key '{val}'"))?;
        }
        "keybind_quit" | "keybind_exit" => out.keymap.quit = chord(key, val)?,
        "keybind_help" => out.keymap.help = chord(key, val)?,
        "keybind_load_more" => out.keymap.load_more = chord(key, val)?,
        "keybind_reset" => out.keymap.reset = chord(key, val)?,
        "keybind_quick_filter" => out.keymap.quick_filter = chord(key, val)?,
        "keybind_sort_next" => out.keymap.sort_next = chord(key, val)?,
        other => return Err(format!("unknown key '{other}'")),
    }
    Ok(())
}

/// What: Load settings from `path`, writing the skeleton first when the file is absent.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
///
/// Details:
/// - Every rejected line is logged at `warn` and otherwise ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton");
            }
        }
    }
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable; using defaults");
            return Settings::default();
        }
    };
    let (settings, warnings) = parse_settings(&content);
    for w in &warnings {
        tracing::warn!(path = %path.display(), "settings: {w}");
    }
    tracing::info!(path = %path.display(), "loaded settings");
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    /// What: The skeleton parses cleanly into the defaults.
    fn skeleton_matches_defaults() {
        let (s, warnings) = parse_settings(SETTINGS_SKELETON);
        assert!(warnings.is_empty(), "{warnings:?}");
        let d = Settings::default();
        assert_eq!(s.source_url, d.source_url);
        assert_eq!(s.browser, d.browser);
        assert_eq!(s.near_bottom_threshold, d.near_bottom_threshold);
        assert_eq!(s.scroll_throttle, d.scroll_throttle);
        assert_eq!(s.price_slider_step, d.price_slider_step);
        assert_eq!(s.request_timeout, None);
    }

    #[test]
    /// What: Values override defaults; bad lines warn and keep defaults.
    ///
    /// - Input: valid overrides mixed with an unknown key, a bad number and a line without '='
    /// - Output: overrides applied; three warnings
    fn overrides_and_warnings() {
        let text = "\
page-step = 3   # smaller pages
Sort_Mode = price_desc
request_timeout_secs = 5
reset_window_on_filter_change = yes
keybind_quit = Ctrl+Q
colour = blue
initial_visible = many
just text
";
        let (s, warnings) = parse_settings(text);
        assert_eq!(s.browser.page_step, 3);
        assert_eq!(s.browser.initial_sort, SortKey::PriceDesc);
        assert_eq!(s.request_timeout, Some(Duration::from_secs(5)));
        assert!(s.browser.reset_window_on_filter_change);
        assert!(s.keymap.quit[0].matches(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(s.browser.initial_visible, 12);
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    /// What: A zero page step is rejected.
    fn zero_step_rejected() {
        let (s, warnings) = parse_settings("page_step = 0");
        assert_eq!(s.browser.page_step, 9);
        assert_eq!(warnings.len(), 1);
    }
}
