use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use crate::logic::StatCard;
use crate::state::{AppState, Focus, Page, TableSnapshot};
use crate::theme::theme;

/// Page tabs with the current page highlighted.
pub(super) fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!("{} {}", i + 1, p.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(Style::default().fg(th.subtext0).bg(th.mantle))
        .highlight_style(
            Style::default()
                .fg(th.mauve)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(th.overlay1)));
    f.render_widget(tabs, area);
}

/// Most stat cards placed side by side before wrapping to a new row.
pub(super) const STATS_PER_ROW: usize = 4;

/// Stat cards in rows of [`STATS_PER_ROW`] equal columns.
pub(super) fn render_stats(f: &mut Frame, stats: &[StatCard], area: Rect) {
    let row_count = stats.len().div_ceil(STATS_PER_ROW).max(1);
    let ratio = u32::try_from(row_count).unwrap_or(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Ratio(1, ratio)))
        .split(area);
    for (chunk, row) in stats.chunks(STATS_PER_ROW).zip(rows.iter()) {
        render_stat_row(f, chunk, *row);
    }
}

/// One row of stat cards laid out in equal columns.
fn render_stat_row(f: &mut Frame, stats: &[StatCard], area: Rect) {
    let th = theme();
    let n = u32::try_from(STATS_PER_ROW).unwrap_or(1);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..STATS_PER_ROW).map(|_| Constraint::Ratio(1, n)))
        .split(area);
    for (card, rect) in stats.iter().zip(cols.iter()) {
        let mut value = vec![Span::styled(
            card.value.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )];
        if let Some(sub) = &card.sub {
            value.push(Span::styled(
                format!(" ({sub})"),
                Style::default().fg(th.subtext0),
            ));
        }
        let widget = Paragraph::new(Line::from(value)).block(
            Block::default()
                .title(Span::styled(
                    card.title.clone(),
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1))
                .style(Style::default().bg(th.base)),
        );
        f.render_widget(widget, *rect);
    }
}

/// What: Search box plus the active sort, facet and date filter.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (focus and view state)
/// - `snap`: Current table snapshot (selection count)
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the toolbar; places the terminal cursor in the search box when focused
pub(super) fn render_toolbar(f: &mut Frame, app: &AppState, snap: &TableSnapshot, area: Rect) {
    let th = theme();
    let view = app.table().view();
    let state = view.state();
    let focused = app.focus == Focus::Search;

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let query_line = if state.search_query.is_empty() && !focused {
        Line::from(Span::styled(
            format!("Search {}… (/)", view.config().noun),
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(state.search_query.clone(), Style::default().fg(th.text)),
        ])
    };
    let border = if focused { th.mauve } else { th.surface1 };
    let search = Paragraph::new(query_line).block(
        Block::default()
            .title(Span::styled(
                if focused { "Search (focused)" } else { "Search" },
                Style::default().fg(border),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, parts[0]);
    if focused {
        let width = unicode_width::UnicodeWidthStr::width(state.search_query.as_str());
        let x = parts[0]
            .x
            .saturating_add(3)
            .saturating_add(u16::try_from(width).unwrap_or(u16::MAX));
        f.set_cursor_position((x.min(parts[0].right().saturating_sub(2)), parts[0].y + 1));
    }

    let chip = |label: &str, value: String, active: bool| {
        vec![
            Span::styled(format!("{label}: "), Style::default().fg(th.overlay1)),
            Span::styled(
                value,
                if active {
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(th.subtext0)
                },
            ),
            Span::raw("  "),
        ]
    };
    let mut spans = Vec::new();
    let sort = match (&state.sort, view.sort_label()) {
        (Some(_), Some(label)) => label.to_string(),
        (Some(spec), None) => format!("{} {}", spec.key, spec.direction.arrow()),
        (None, _) => "none".to_string(),
    };
    spans.extend(chip("Sort", sort, state.sort.is_some()));
    for facet in view.config().facets {
        let value = state.facet_value(facet.field);
        spans.extend(chip(
            facet.label,
            value.unwrap_or("all").to_string(),
            value.is_some(),
        ));
    }
    if view.config().date_field.is_some() {
        let dates = state
            .date_range
            .map_or_else(|| "any".to_string(), |r| r.label());
        spans.extend(chip("Dates", dates, state.date_range.is_some()));
    }
    spans.extend(chip(
        "Selected",
        snap.selected_count.to_string(),
        snap.selected_count > 0,
    ));
    if app.page == Page::Reviews {
        let on = app.auto_approve;
        let value = if on { "on" } else { "off" };
        spans.extend(chip("Auto-approve", value.to_string(), on));
    }
    let filters = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(filters, parts[1]);
}
