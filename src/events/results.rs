use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::dispatch;
use crate::logic::Action;
use crate::state::{AppState, Focus};

/// What: Feed the current scroll position to the near-bottom trigger.
///
/// Details:
/// - Called after every downward cursor move or wheel scroll; the trigger is throttled.
/// - Fires even when everything is revealed; the extra window carries over to wider filters.
pub(super) fn on_scrolled(app: &mut AppState) {
    let metrics = app.scroll_metrics();
    if app.scroll_trigger.poll(metrics, Instant::now()) {
        tracing::debug!(?metrics, "near bottom; revealing next page");
        dispatch(app, Action::NearBottom);
    }
}

/// Open the detail view for the card under the cursor.
pub(super) fn open_cursor_item(app: &mut AppState) {
    if let Some(id) = app.cursor_item().map(|w| w.id) {
        dispatch(app, Action::Select(id));
    }
}

/// Handle key events while the Results pane is focused.
///
/// Returns `true` to exit the app (`q`), `false` otherwise.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let page = isize::try_from(app.cards_per_page()).unwrap_or(1);
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor(1);
            on_scrolled(app);
        }
        KeyCode::PageUp => app.move_cursor(-page),
        KeyCode::PageDown => {
            app.move_cursor(page);
            on_scrolled(app);
        }
        KeyCode::Home => app.cursor_to_edge(false),
        KeyCode::End => {
            app.cursor_to_edge(true);
            on_scrolled(app);
        }
        KeyCode::Enter => open_cursor_item(app),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}
