use crossterm::event::{KeyCode, KeyEvent};

use super::dispatch;
use crate::logic::{Action, cycle_option};
use crate::state::{AppState, FilterField};

/// What: Build the action that moves the highlighted selector one step.
///
/// Inputs:
/// - `app`: Current state (options, criteria, slider step).
/// - `forward`: `true` for Right, `false` for Left.
///
/// Output:
/// - The browser action for the highlighted field.
fn step_action(app: &AppState, forward: bool) -> Action {
    let b = &app.browser;
    match app.filter_field {
        FilterField::Brand => Action::SetBrand(cycle_option(&b.brands, &b.criteria.brand, forward)),
        FilterField::Country => {
            Action::SetCountry(cycle_option(&b.countries, &b.criteria.country, forward))
        }
        FilterField::MaxPrice => {
            let cur = b.criteria.price.max.min(b.config.slider_max);
            let step = app.price_slider_step;
            let next = if forward {
                cur.saturating_add(step)
            } else {
                cur.saturating_sub(step)
            };
            Action::SetMaxPrice(next)
        }
        FilterField::Sort => Action::SetSort(if forward {
            b.criteria.sort.next()
        } else {
            b.criteria.sort.prev()
        }),
    }
}

/// Handle key events while the Filters pane is focused.
///
/// Up/Down choose the selector, Left/Right change it. `q` quits.
pub fn handle_filters_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.filter_field = app.filter_field.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.filter_field = app.filter_field.next(),
        KeyCode::Left | KeyCode::Char('h') => {
            let a = step_action(app, false);
            dispatch(app, a);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
            let a = step_action(app, true);
            dispatch(app, a);
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}
