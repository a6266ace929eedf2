use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::results::{on_scrolled, open_cursor_item};
use crate::state::{AppState, CARD_LINES, Focus};

/// What: Handle mouse input over the results pane.
///
/// Details:
/// - Wheel scrolling moves the cursor one card and feeds the near-bottom trigger.
/// - Left click focuses the results, selects the clicked card and opens its detail.
/// - Ignored while the detail modal or help overlay is shown.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    if app.browser.selection.is_open() || app.show_help {
        return;
    }
    let Some(rect) = app.results_rect else {
        return;
    };
    let inside = m.column >= rect.x
        && m.column < rect.x.saturating_add(rect.width)
        && m.row >= rect.y
        && m.row < rect.y.saturating_add(rect.height);
    if !inside {
        return;
    }
    match m.kind {
        MouseEventKind::ScrollDown => {
            app.move_cursor(1);
            on_scrolled(app);
        }
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        MouseEventKind::Down(MouseButton::Left) => {
            // Row 0 of the rect is the border/header line.
            let Some(line) = m.row.checked_sub(rect.y.saturating_add(1)) else {
                return;
            };
            let index = usize::from(line / CARD_LINES) + app.list_state.offset();
            if index < app.browser.visible().len() {
                app.focus = Focus::Results;
                app.list_state.select(Some(index));
                open_cursor_item(app);
            }
        }
        _ => {}
    }
}
