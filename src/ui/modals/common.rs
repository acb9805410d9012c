use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;

/// What: Compute a centered rectangle of at most `w` x `h` inside `area`.
///
/// Inputs:
/// - `area`: Full screen area
/// - `w`, `h`: Desired size
///
/// Output:
/// - Rectangle clamped to `area` minus a small margin
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(4));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Render a centered modal with a styled title and supplied lines.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the modal
/// - `box_title`: Border title to display
/// - `lines`: Fully prepared line content
/// - `accent`: Border and title color
///
/// Output:
/// - Draws the modal box sized to its content (up to 80x30)
pub fn render_simple_list_modal(
    f: &mut Frame,
    area: Rect,
    box_title: &str,
    lines: Vec<Line<'static>>,
    accent: ratatui::style::Color,
) {
    let th = theme();
    let content_w = lines.iter().map(Line::width).max().unwrap_or(0);
    let w = u16::try_from(content_w + 4).unwrap_or(u16::MAX).clamp(30, 80);
    let h = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX).min(30);
    let rect = centered_rect(area, w, h);
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(ratatui::text::Span::styled(
                    format!(" {box_title} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
