//! Rendering of the browser: filters sidebar, result cards and overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod details;
mod filters;
pub mod format;
mod help;
mod results;

pub use results::{EMPTY_MESSAGE, LOADING_MESSAGE};

/// Width of the filters sidebar in columns.
const SIDEBAR_WIDTH: u16 = 34;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Mutable application state (list offsets and hit-test rects are updated)
///
/// Details:
/// - Overlays are drawn last: the detail modal wins over the help overlay.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    filters::render_filters(f, app, cols[0]);
    results::render_results(f, app, cols[1]);
    render_status(f, app, rows[1]);

    if let Some(w) = app.browser.selection.current().cloned() {
        details::render_details(f, area, &w);
    } else if app.show_help {
        help::render_help(f, app, area);
    }
}

/// Bottom status line: catalog size and source, or the load failure.
fn render_status(f: &mut Frame, app: &AppState, area: ratatui::prelude::Rect) {
    let th = theme();
    let catalog = &app.browser.catalog;
    let span = if let Some(reason) = catalog.failure() {
        Span::styled(
            format!(" Catalog unavailable: {reason}"),
            Style::default().fg(th.yellow),
        )
    } else if catalog.is_loaded() {
        Span::styled(
            format!(" {} watches from {}", catalog.len(), app.source_label),
            Style::default().fg(th.overlay1),
        )
    } else {
        Span::styled(
            format!(" Fetching {}", app.source_label),
            Style::default().fg(th.overlay1),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(span)).style(Style::default().bg(th.crust)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Action, BrowserConfig, BrowserState};
    use crate::state::Watch;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(term: &Terminal<TestBackend>) -> String {
        let buf = term.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    /// What: A full frame shows the sidebar and, once selected, the detail modal.
    ///
    /// - Input: one item, selected via the browser
    /// - Output: the modal with the raw price and the sample description
    fn full_frame_with_detail() {
        let item = Watch {
            id: 1,
            name: "Solid Gold Petite Micropave".into(),
            brand: "jewelery".into(),
            country: "Global".into(),
            price_usd: 16_800,
            year: 2020,
            image: "https://example.invalid/ring.jpg".into(),
        };
        let mut app = AppState {
            browser: BrowserState::with_items(BrowserConfig::default(), vec![item]),
            ..AppState::default()
        };
        let mut term = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = screen(&term);
        assert!(text.contains("Search"));
        assert!(text.contains("Max price"));
        assert!(text.contains("Showing 1 results"));

        app.browser.apply(Action::Select(1));
        term.draw(|f| ui(f, &mut app)).expect("draw");
        let text = screen(&term);
        assert!(text.contains("$16800"));
        assert!(text.contains("Sample watch data loaded via API."));
    }
}
