use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::common::render_simple_list_modal;
use crate::state::ReasonsModal;
use crate::theme::theme;

/// What: Render the "Manage Review Reasons" editor.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `reasons`: Current reason list
/// - `m`: Highlight and typed text
///
/// Output:
/// - Draws the list with the highlighted entry, the add box and key hints
pub fn render_reasons(f: &mut Frame, area: Rect, reasons: &[String], m: &ReasonsModal) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "Configure the main reason options available for reviews.",
            Style::default().fg(th.subtext0),
        )),
        Line::from(""),
    ];
    if reasons.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no reasons)",
            Style::default().fg(th.overlay1),
        )));
    }
    for (i, reason) in reasons.iter().enumerate() {
        let line = if i == m.cursor {
            Line::from(Span::styled(
                format!("▶ {reason}"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {reason}"),
                Style::default().fg(th.text),
            ))
        };
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Add: ", Style::default().fg(th.overlay1)),
        Span::styled(format!("{}_", m.input), Style::default().fg(th.sapphire)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(th.green).add_modifier(Modifier::BOLD)),
        Span::styled(" add   ", Style::default().fg(th.overlay1)),
        Span::styled("Del", Style::default().fg(th.red).add_modifier(Modifier::BOLD)),
        Span::styled(" remove   ", Style::default().fg(th.overlay1)),
        Span::styled("↑/↓", Style::default().fg(th.sapphire)),
        Span::styled(" move   ", Style::default().fg(th.overlay1)),
        Span::styled("Esc", Style::default().fg(th.sapphire)),
        Span::styled(" close", Style::default().fg(th.overlay1)),
    ]));
    render_simple_list_modal(f, area, "Manage Review Reasons", lines, th.mauve);
}
