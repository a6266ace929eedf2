//! Event handling layer for the TUI.
//!
//! `handle_event` translates terminal events into browser [`Action`]s and
//! UI-only state changes; pane-specific keys live in submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::Action;
use crate::state::{AppState, Focus};
use crate::theme::KeyMap;

mod filters;
mod mouse;
mod results;
mod search;

/// Apply `action` to the browser state and keep the cursor valid.
pub fn dispatch(app: &mut AppState, action: Action) {
    app.browser.apply(action);
    app.clamp_cursor();
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key(ke, app),
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app);
            false
        }
        _ => false,
    }
}

fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    let (code, mods) = (ke.code, ke.modifiers);
    if KeyMap::any(&app.keymap.quit, code, mods) {
        return true;
    }

    // Detail modal swallows everything except its close keys.
    if app.browser.selection.is_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            dispatch(app, Action::CloseDetail);
        }
        return false;
    }
    if app.show_help {
        if matches!(code, KeyCode::Esc | KeyCode::Enter) || KeyMap::any(&app.keymap.help, code, mods)
        {
            app.show_help = false;
        }
        return false;
    }

    if handle_global_chord(app, code, mods) {
        return false;
    }

    match code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Filters => filters::handle_filters_key(ke, app),
        Focus::Results => results::handle_results_key(ke, app),
    }
}

/// Keymap actions that work from every pane. Returns `true` when consumed.
fn handle_global_chord(app: &mut AppState, code: KeyCode, mods: KeyModifiers) -> bool {
    let km = &app.keymap;
    let action = if KeyMap::any(&km.help, code, mods) {
        app.show_help = true;
        return true;
    } else if KeyMap::any(&km.load_more, code, mods) {
        Action::LoadMore
    } else if KeyMap::any(&km.reset, code, mods) {
        Action::ResetFilters
    } else if KeyMap::any(&km.quick_filter, code, mods) {
        Action::QuickPriceCap
    } else if KeyMap::any(&km.sort_next, code, mods) {
        Action::SetSort(app.browser.criteria.sort.next())
    } else {
        return false;
    };
    tracing::debug!(?action, "global key action");
    dispatch(app, action);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{BrowserConfig, BrowserState};
    use crate::state::{SortKey, Watch};

    pub(super) fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub(super) fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub(super) fn app_with(n: u32) -> AppState {
        let items = (1..=n)
            .map(|i| Watch {
                id: i,
                name: format!("Watch {i}"),
                brand: if i % 2 == 0 { "even" } else { "odd" }.into(),
                country: "Global".into(),
                price_usd: u64::from(i) * 1000,
                year: 2020,
                image: String::new(),
            })
            .collect();
        let mut app = AppState {
            browser: BrowserState::with_items(BrowserConfig::default(), items),
            results_viewport_lines: 10,
            ..AppState::default()
        };
        app.clamp_cursor();
        app
    }

    #[test]
    /// What: Global chords reach the browser regardless of focus.
    fn global_chords() {
        let mut app = app_with(30);
        assert!(!handle_event(ctrl('l'), &mut app));
        assert_eq!(app.browser.pagination.visible(), 21);
        handle_event(ctrl('s'), &mut app);
        assert_eq!(app.browser.criteria.sort, SortKey::PriceAsc);
        handle_event(ctrl('f'), &mut app);
        assert_eq!(app.browser.criteria.price.max, 5_000);
        handle_event(ctrl('r'), &mut app);
        assert_eq!(app.browser.criteria.price.max, 1_000_000);
        assert_eq!(app.browser.criteria.sort, SortKey::Relevance);
        assert!(handle_event(ctrl('c'), &mut app));
    }

    #[test]
    /// What: The open detail modal only reacts to its close keys.
    fn modal_captures_keys() {
        let mut app = app_with(5);
        app.focus = Focus::Results;
        handle_event(key(KeyCode::Enter), &mut app);
        assert!(app.browser.selection.is_open());
        handle_event(key(KeyCode::Down), &mut app);
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
        assert!(!app.browser.selection.is_open());
    }

    #[test]
    /// What: Help toggles on F1 and closes on Esc; Tab cycles focus.
    fn help_and_focus() {
        let mut app = app_with(1);
        handle_event(key(KeyCode::F(1)), &mut app);
        assert!(app.show_help);
        handle_event(key(KeyCode::Esc), &mut app);
        assert!(!app.show_help);
        handle_event(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Filters);
        handle_event(key(KeyCode::BackTab), &mut app);
        assert_eq!(app.focus, Focus::Search);
    }
}
