use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus, TableSnapshot};
use crate::theme::theme;

/// What: Pagination bar: "Showing X-Y of Z", page window and page size.
///
/// Inputs:
/// - `f`: Frame
/// - `snap`: Table snapshot
/// - `area`: One-line rectangle
///
/// Output:
/// - Draws the label on the left and the page window on the right with the
///   current page highlighted; previous/next markers dim at the ends
pub(super) fn render_pagination(f: &mut Frame, snap: &TableSnapshot, area: Rect) {
    let th = theme();
    let page = &snap.page;
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let label = Line::from(vec![
        Span::styled(page.label(), Style::default().fg(th.subtext0)),
        Span::styled(
            format!("  · {} per page", page.items_per_page),
            Style::default().fg(th.overlay1),
        ),
    ]);
    f.render_widget(Paragraph::new(label), parts[0]);

    let arrow = |enabled: bool, text: &'static str| {
        Span::styled(
            text,
            if enabled {
                Style::default().fg(th.sapphire)
            } else {
                Style::default().fg(th.surface1)
            },
        )
    };
    let mut spans = vec![arrow(page.has_previous(), "« ‹ ")];
    for n in &page.page_window {
        let text = format!(" {n} ");
        if *n == page.current_page {
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(th.base)
                    .bg(th.mauve)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(text, Style::default().fg(th.text)));
        }
    }
    spans.push(arrow(page.has_next(), " › »"));
    spans.push(Span::styled(
        format!("  page {}/{}", page.current_page, page.total_pages),
        Style::default().fg(th.overlay1),
    ));
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right),
        parts[1],
    );
}

/// Status message when present, otherwise the most useful key hints.
pub(super) fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints: &[(&str, &str)] = if app.focus == Focus::Search {
            &[("type", "filter"), ("Enter/Esc", "back to table"), ("^U", "clear")]
        } else if app.row_menu_open() {
            &[("j/k", "move"), ("Enter", "run"), ("Esc", "close")]
        } else {
            &[
                ("/", "search"),
                ("Space", "select"),
                ("a", "all"),
                ("s", "sort"),
                ("f", "filter"),
                ("d", "dates"),
                ("m", "menu"),
                ("x", "delete"),
                ("e", "export"),
                ("?", "help"),
                ("q", "quit"),
            ]
        };
        let mut spans = Vec::new();
        for (key, what) in hints {
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {what}  "),
                Style::default().fg(th.overlay1),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
}
