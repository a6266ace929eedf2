use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Watch;
use crate::theme::theme;

/// Static description line shown for every record.
const SAMPLE_DESCRIPTION: &str = "Description: Sample watch data loaded via API.";

/// What: Compute a rectangle of at most `max_w` x `max_h` centered in `area`.
#[must_use]
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(8).min(max_w);
    let h = area.height.saturating_sub(4).min(max_h);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// What: Render the detail modal for the inspected record.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the modal
/// - `w`: Record under inspection
///
/// Details:
/// - Clears the area beneath the modal so the result cards do not bleed through.
/// - The price is shown raw (`$16800`); only the cards group thousands.
pub fn render_details(f: &mut Frame, area: Rect, w: &Watch) {
    let th = theme();
    let rect = centered_rect(area, 72, 14);
    f.render_widget(Clear, rect);

    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay2));
    let lines = vec![
        Line::from(Span::styled(
            w.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} • {}", w.brand, w.country),
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
        Line::from(vec![
            label("Image  "),
            Span::styled(w.image.clone(), Style::default().fg(th.sapphire)),
        ]),
        Line::from(vec![
            label("Price  "),
            Span::styled(
                format!("${}", w.price_usd),
                Style::default().fg(th.pink).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Year   "),
            Span::styled(w.year.to_string(), Style::default().fg(th.text)),
        ]),
        Line::from(""),
        Line::from(Span::styled(SAMPLE_DESCRIPTION, Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Esc / Enter / q to close",
            Style::default().fg(th.overlay1),
        )),
    ];
    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Details ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}
