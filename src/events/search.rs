use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::dispatch;
use crate::logic::Action;
use crate::state::{AppState, Focus};

/// Handle key events while the Search pane is focused.
///
/// Printable characters edit the query; Enter, Esc and Down hand focus to the results.
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match (ke.code, ke.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            dispatch(app, Action::SetQuery(String::new()));
        }
        (KeyCode::Char(ch), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            dispatch(app, Action::PushQueryChar(ch));
        }
        (KeyCode::Backspace, _) => dispatch(app, Action::PopQueryChar),
        (KeyCode::Enter | KeyCode::Esc | KeyCode::Down, _) => app.focus = Focus::Results,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::super::handle_event;
    use super::super::tests::{app_with, key};
    use super::*;
    use crossterm::event::Event as CEvent;

    #[test]
    /// What: Typing filters live; backspace and Ctrl+U edit the query.
    ///
    /// - Input: "watch 1" typed into a 12-item catalog
    /// - Output: four matches, then back to all after clearing
    fn typing_filters_results() {
        let mut app = app_with(12);
        for ch in "watch 1".chars() {
            handle_event(key(KeyCode::Char(ch)), &mut app);
        }
        assert_eq!(app.browser.criteria.query, "watch 1");
        assert_eq!(app.browser.filtered.len(), 4);
        handle_event(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.browser.criteria.query, "watch ");
        handle_event(
            CEvent::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            &mut app,
        );
        assert!(app.browser.criteria.query.is_empty());
        assert_eq!(app.browser.filtered.len(), 12);
    }

    #[test]
    /// What: 'q' is text in the search box, not quit; Enter moves focus.
    fn q_is_text_in_search() {
        let mut app = app_with(3);
        assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
        assert_eq!(app.browser.criteria.query, "q");
        handle_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.focus, Focus::Results);
    }
}
