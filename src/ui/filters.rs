use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::format::{format_price, truncate_to_width};
use crate::state::{AppState, FilterField, Focus};
use crate::theme::{Theme, theme};

/// Bordered block in the shared pane style; the border lights up when focused.
pub(super) fn pane_block(title: &str, focused: bool, th: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }))
}

/// What: Render the left sidebar: search box, filter selectors and key hints.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (criteria, focus, highlighted field)
/// - `area`: Sidebar rectangle
///
/// Details:
/// - Places the terminal cursor at the end of the query while the search box is focused.
pub fn render_filters(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    render_search_box(f, app, rows[0], &th);
    render_selectors(f, app, rows[1], &th);
    render_hints(f, app, rows[2], &th);
}

fn render_search_box(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Search;
    let query = &app.browser.criteria.query;
    let inner_w = usize::from(area.width.saturating_sub(4));
    let shown = if query.is_empty() && !focused {
        Span::styled("Search by name or brand…", Style::default().fg(th.overlay1))
    } else {
        Span::styled(
            truncate_to_width(query, inner_w),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        )
    };
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        shown,
    ]);
    let para = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(pane_block("Search", focused, th));
    f.render_widget(para, area);

    if focused && area.width > 4 && area.height > 2 {
        let cols = u16::try_from(query.width().min(inner_w)).unwrap_or(0);
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3 + cols).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_selectors(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::Filters;
    let c = &app.browser.criteria;
    let max_shown = c.price.max.min(app.browser.config.slider_max);
    let lines: Vec<Line> = FilterField::ALL
        .iter()
        .map(|field| {
            let (label, value) = match field {
                FilterField::Brand => ("Brand", c.brand.clone()),
                FilterField::Country => ("Country", c.country.clone()),
                FilterField::MaxPrice => ("Max price", format!("0 - {}", format_price(max_shown))),
                FilterField::Sort => ("Sort", c.sort.label().to_string()),
            };
            let active = focused && *field == app.filter_field;
            let marker = if active { "▶ " } else { "  " };
            let value_style = if active {
                Style::default().fg(th.crust).bg(th.lavender)
            } else {
                Style::default().fg(th.text)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(th.sapphire)),
                Span::styled(format!("{label:<10}"), Style::default().fg(th.overlay2)),
                Span::styled(format!("‹ {value} ›"), value_style),
            ])
        })
        .collect();
    let para = Paragraph::new(lines)
        .style(Style::default().bg(th.base))
        .block(pane_block("Filters", focused, th));
    f.render_widget(para, area);
}

fn render_hints(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let km = &app.keymap;
    let chord = |list: &[crate::theme::KeyChord]| {
        list.first().map_or_else(|| "-".to_string(), crate::theme::KeyChord::label)
    };
    let hint = |keys: String, what: String| {
        Line::from(vec![
            Span::styled(
                format!("{keys:<8}"),
                Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(what, Style::default().fg(th.subtext0)),
        ])
    };
    let lines = vec![
        hint("Tab".into(), "next pane".into()),
        hint(
            chord(&km.quick_filter),
            format!("under {}", format_price(app.browser.config.quick_price_cap)),
        ),
        hint(chord(&km.reset), "reset filters".into()),
        hint(chord(&km.load_more), "load more".into()),
        hint(chord(&km.sort_next), "next sort".into()),
        hint(chord(&km.help), "help".into()),
        hint(chord(&km.quit), "quit".into()),
    ];
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(pane_block("Keys", false, th));
    f.render_widget(para, area);
}
