use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::details::centered_rect;
use crate::state::AppState;
use crate::theme::{KeyChord, theme};

fn chords(list: &[KeyChord]) -> String {
    list.iter()
        .map(KeyChord::label)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Render the key reference overlay using the configured keymap.
pub fn render_help(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.keymap;
    let rows: Vec<(String, &str)> = vec![
        ("Tab / Shift+Tab".into(), "Cycle search, filters and results"),
        ("Type".into(), "Edit the search query (Ctrl+U clears)"),
        ("Up / Down".into(), "Pick a filter or move through results"),
        ("Left / Right".into(), "Change the highlighted filter"),
        ("PgUp / PgDn / Home / End".into(), "Jump through results"),
        ("Enter / click".into(), "Open the highlighted watch"),
        (chords(&km.load_more), "Load more results"),
        (chords(&km.quick_filter), "Quick price filter"),
        (chords(&km.reset), "Reset filters"),
        (chords(&km.sort_next), "Next sort order"),
        (chords(&km.help), "Toggle this help"),
        (chords(&km.quit), "Quit (q outside search)"),
    ];
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<26}"),
                    Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(what.to_string(), Style::default().fg(th.text)),
            ])
        })
        .collect();

    let rect = centered_rect(area, 72, 16);
    f.render_widget(Clear, rect);
    let para = Paragraph::new(lines)
        .style(Style::default().bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(
                    " Help ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}
