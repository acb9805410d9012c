use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::common::centered_rect;
use crate::state::DatePickerModal;
use crate::theme::theme;

/// Month names for the picker title.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// What: Render the date range picker.
///
/// Inputs:
/// - `f`: Frame
/// - `area`: Full screen area
/// - `modal`: Picker state
/// - `today`: Date for the today marker
///
/// Output:
/// - Draws the month title, weekday header, the 6x7 grid and the current
///   selection; other-month days are dimmed, range days shaded, ends bold
pub fn render_date_picker(f: &mut Frame, area: Rect, modal: &DatePickerModal, today: NaiveDate) {
    let th = theme();
    let (year, month) = modal.picker.displayed();
    let month_name = usize::try_from(month)
        .ok()
        .and_then(|m| MONTHS.get(m.wrapping_sub(1)))
        .copied()
        .unwrap_or("?");

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            format!("‹ {month_name} {year} ›"),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Su  Mo  Tu  We  Th  Fr  Sa",
            Style::default().fg(th.overlay1),
        )),
    ];

    let cells = modal.picker.grid(today);
    for week in cells.chunks(7) {
        let spans: Vec<Span<'static>> = week
            .iter()
            .map(|c| {
                let mut style = if c.in_current_month {
                    Style::default().fg(th.text)
                } else {
                    Style::default().fg(th.surface1)
                };
                if c.in_range {
                    style = style.bg(th.surface1);
                }
                if c.is_endpoint {
                    style = style
                        .fg(th.base)
                        .bg(th.sapphire)
                        .add_modifier(Modifier::BOLD);
                }
                if c.is_today {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                if c.date == modal.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(format!(" {:>2} ", c.date.day()), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let sel = modal.picker.selection();
    let show = |d: Option<NaiveDate>| d.map_or_else(|| "—".to_string(), |d| d.to_string());
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("From ", Style::default().fg(th.overlay1)),
        Span::styled(show(sel.from), Style::default().fg(th.text)),
        Span::styled("  To ", Style::default().fg(th.overlay1)),
        Span::styled(show(sel.to), Style::default().fg(th.text)),
    ]));
    if let Some(notice) = &modal.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(th.red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter pick · [ ] month · a apply · c clear · Esc close",
        Style::default().fg(th.overlay1),
    )));

    let h = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let rect = centered_rect(area, 60, h);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(th.mantle))
            .block(
                Block::default()
                    .title(Span::styled(
                        " Date range ",
                        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(th.sapphire))
                    .style(Style::default().bg(th.mantle)),
            ),
        rect,
    );
}
