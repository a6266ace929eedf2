use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::filters::pane_block;
use super::format::{format_price, truncate_to_width};
use crate::state::{AppState, Focus, Watch};
use crate::theme::{Theme, theme};

/// Shown when the filtered set is empty (including after a failed load).
pub const EMPTY_MESSAGE: &str = "No watches found. Check your filters.";
/// Shown while the catalog fetch is still pending.
pub const LOADING_MESSAGE: &str = "Loading catalog…";

/// What: Build the two display lines of one result card.
///
/// Inputs:
/// - `w`: Record to render
/// - `width`: Usable columns inside the list
/// - `th`: Palette
///
/// Output:
/// - `name` on the first line; `brand • country`, price and year on the second.
fn card(w: &Watch, width: usize, th: &Theme) -> ListItem<'static> {
    let name = Line::from(Span::styled(
        truncate_to_width(&w.name, width),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    let origin = truncate_to_width(&format!("{} • {}", w.brand, w.country), width / 2);
    let meta = Line::from(vec![
        Span::styled(origin, Style::default().fg(th.overlay2)),
        Span::raw("   "),
        Span::styled(format_price(w.price_usd), Style::default().fg(th.pink)),
        Span::raw("   "),
        Span::styled(w.year.to_string(), Style::default().fg(th.subtext0)),
    ]);
    ListItem::new(vec![name, meta])
}

/// What: Render the results pane: count header, card list and load-more footer.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; its list state is updated by the stateful render
/// - `area`: Results rectangle
///
/// Details:
/// - Records `results_rect` and `results_viewport_lines` for mouse hit-testing and the
///   near-bottom trigger.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let filtered_len = app.browser.filtered.len();
    let has_more = app.browser.has_more();

    let block = pane_block(&format!("Showing {filtered_len} results"), focused, &th);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let footer_h = u16::from(has_more);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_h)])
        .split(inner);
    let list_area = rows[0];

    // Hit-testing in the mouse handler treats the row above the list as the header line.
    app.results_rect = Some(Rect {
        x: area.x,
        y: list_area.y.saturating_sub(1),
        width: area.width,
        height: list_area.height.saturating_add(1),
    });
    app.results_viewport_lines = list_area.height;

    if filtered_len == 0 {
        let msg = if app.browser.catalog.is_loaded() {
            EMPTY_MESSAGE
        } else {
            LOADING_MESSAGE
        };
        let para = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(th.subtext0),
        )))
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base));
        f.render_widget(para, list_area);
        return;
    }

    let width = usize::from(list_area.width.saturating_sub(2));
    let items: Vec<ListItem> = app
        .browser
        .visible()
        .iter()
        .map(|w| card(w, width, &th))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(if focused {
            Style::default().fg(th.crust).bg(th.lavender)
        } else {
            Style::default().bg(th.mantle)
        })
        .highlight_symbol("▌ ");
    f.render_stateful_widget(list, list_area, &mut app.list_state);

    if has_more {
        let remaining = app.browser.pagination.remaining(filtered_len);
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Load more ({remaining} remaining)"),
                Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  scroll down or {}", load_more_hint(app)),
                Style::default().fg(th.overlay1),
            ),
        ]))
        .style(Style::default().bg(th.base));
        f.render_widget(footer, rows[1]);
    }
}

fn load_more_hint(app: &AppState) -> String {
    app.keymap
        .load_more
        .first()
        .map_or_else(String::new, crate::theme::KeyChord::label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Action, BrowserConfig, BrowserState};
    use crate::sources::LoadOutcome;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(term: &Terminal<TestBackend>) -> String {
        let buf = term.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn watch(i: u32) -> Watch {
        Watch {
            id: i,
            name: format!("Watch {i}"),
            brand: "jewelery".into(),
            country: "Global".into(),
            price_usd: 1_099 * u64::from(i),
            year: 2021,
            image: String::new(),
        }
    }

    #[test]
    /// What: Header, cards and load-more footer render and the viewport is recorded.
    ///
    /// - Input: 15 items with the default 12-item window
    /// - Output: "Showing 15 results", a formatted price and "Load more (3 remaining)"
    fn renders_cards_and_footer() {
        let mut term = Terminal::new(TestBackend::new(80, 40)).expect("terminal");
        let mut app = AppState {
            browser: BrowserState::with_items(BrowserConfig::default(), (1..=15).map(watch).collect()),
            ..AppState::default()
        };
        app.clamp_cursor();
        term.draw(|f| render_results(f, &mut app, f.area()))
            .expect("draw");
        let text = screen_text(&term);
        assert!(text.contains("Showing 15 results"));
        assert!(text.contains("$1,099"));
        assert!(text.contains("jewelery • Global"));
        assert!(text.contains("Load more (3 remaining)"));
        assert_eq!(app.results_viewport_lines, 37);
    }

    #[test]
    /// What: Pending and failed loads show the loading and empty messages.
    fn loading_then_empty() {
        let mut term = Terminal::new(TestBackend::new(60, 10)).expect("terminal");
        let mut app = AppState::default();
        term.draw(|f| render_results(f, &mut app, f.area()))
            .expect("draw");
        assert!(screen_text(&term).contains(LOADING_MESSAGE));

        app.browser
            .apply(Action::CatalogLoaded(LoadOutcome::Failed("offline".into())));
        term.draw(|f| render_results(f, &mut app, f.area()))
            .expect("draw");
        let text = screen_text(&term);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Showing 0 results"));
    }
}
