use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::common::centered_rect;
use crate::state::forms::FormState;
use crate::theme::theme;

/// What: Render a create form.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `form`: Form state
///
/// Output:
/// - Draws the read-only id, one line per input (choices show `‹ value ›`),
///   the validation error when present and the key hints
pub fn render_form(f: &mut Frame, area: Rect, form: &FormState) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled(format!("{:<12}", "ID"), Style::default().fg(th.overlay1)),
            Span::styled(form.preview_id.clone(), Style::default().fg(th.subtext0)),
        ]),
        Line::from(""),
    ];
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        let marker = if field.required { "*" } else { " " };
        let value = if field.is_choice() {
            format!("‹ {} ›", field.value)
        } else if focused {
            format!("{}▏", field.value)
        } else {
            field.value.clone()
        };
        let value_style = if focused {
            Style::default().fg(th.text).bg(th.surface1)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", field.label), label_style),
            Span::styled(marker, Style::default().fg(th.red)),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab next · ←/→ choose · Enter create · Esc cancel",
        Style::default().fg(th.overlay1),
    )));

    let h = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let rect = centered_rect(area, 60, h);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", form.kind.title()),
                    Style::default().fg(th.green).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.green))
                .style(Style::default().bg(th.mantle)),
        ),
        rect,
    );
}
