use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState,
    },
};

use crate::logic::selection::HeaderCheck;
use crate::state::{AppState, RowAction, TableSnapshot};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Width of the checkbox column.
const CHECK_WIDTH: u16 = 4;
/// Width of the row action menu popup.
const MENU_WIDTH: u16 = 22;

/// Whether column `key` is the one the active sort uses (date columns sort on `<key>_at`).
fn sorts_on(sort_key: &str, column_key: &str) -> bool {
    sort_key == column_key
        || sort_key
            .strip_suffix("_at")
            .is_some_and(|base| base == column_key)
}

/// What: Render the record table of the current page.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state (view state for the sort indicator)
/// - `snap`: Table snapshot
/// - `area`: Target rectangle
///
/// Output:
/// - Draws the header with the tri-state checkbox, the page rows with the
///   cursor highlighted, a placeholder when nothing matches, and the open row menu
pub(super) fn render_table(f: &mut Frame, app: &AppState, snap: &TableSnapshot, area: Rect) {
    let th = theme();
    let view = app.table().view();
    let sort = view.state().sort.as_ref();

    let header_check = match snap.header {
        HeaderCheck::Checked => Span::styled(snap.header.glyph(), Style::default().fg(th.green)),
        HeaderCheck::Indeterminate => {
            Span::styled(snap.header.glyph(), Style::default().fg(th.yellow))
        }
        HeaderCheck::Unchecked => Span::styled(snap.header.glyph(), Style::default().fg(th.overlay1)),
    };
    let mut header_cells = vec![Cell::from(header_check)];
    header_cells.extend(snap.columns.iter().map(|c| {
        let arrow = sort
            .filter(|s| sorts_on(&s.key, c.key))
            .map(|s| format!(" {}", s.direction.arrow()))
            .unwrap_or_default();
        Cell::from(format!("{}{arrow}", c.header))
    }));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(th.mauve)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = snap
        .rows
        .iter()
        .map(|r| {
            let check = if r.selected {
                Span::styled("[x]", Style::default().fg(th.green))
            } else {
                Span::styled("[ ]", Style::default().fg(th.overlay1))
            };
            let mut cells = vec![Cell::from(check)];
            cells.extend(
                r.cells
                    .iter()
                    .zip(snap.columns.iter())
                    .map(|(text, c)| Cell::from(truncate_to_width(text, usize::from(c.width)))),
            );
            let style = if r.selected {
                Style::default().fg(th.text).bg(th.surface1)
            } else {
                Style::default().fg(th.text)
            };
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(CHECK_WIDTH)];
    widths.extend(snap.columns.iter().map(|c| Constraint::Length(c.width)));
    let title = format!(
        " {} ({} of {}) ",
        app.page.title(),
        snap.page.total_items,
        snap.total_records
    );
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1))
                .style(Style::default().bg(th.base)),
        )
        .row_highlight_style(
            Style::default()
                .fg(th.base)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    if snap.rows.is_empty() {
        f.render_widget(table, area);
        // Placeholder row spans every column below the header.
        let placeholder = Rect {
            x: area.x.saturating_add(2),
            y: area.y.saturating_add(2),
            width: area.width.saturating_sub(4),
            height: u16::from(area.height > 3),
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                "No records found",
                Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            placeholder,
        );
        return;
    }
    let mut state = TableState::default();
    state.select(Some(snap.cursor));
    f.render_stateful_widget(table, area, &mut state);

    if let Some(idx) = snap.rows.iter().position(|r| r.menu_open) {
        render_row_menu(f, app.menu_index, idx, area);
    }
}

/// Action popup next to row `row_idx`, clamped inside `area`.
fn render_row_menu(f: &mut Frame, highlighted: usize, row_idx: usize, area: Rect) {
    let th = theme();
    let h = u16::try_from(RowAction::ALL.len()).unwrap_or(3) + 2;
    let w = MENU_WIDTH.min(area.width);
    // Borders plus the header row sit above the first data row.
    let row_y = area
        .y
        .saturating_add(2)
        .saturating_add(u16::try_from(row_idx).unwrap_or(u16::MAX));
    let y = row_y.min(area.bottom().saturating_sub(h));
    let x = area.right().saturating_sub(w + 2).max(area.x);
    let rect = Rect {
        x,
        y,
        width: w,
        height: h.min(area.height),
    };
    let items: Vec<ListItem> = RowAction::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let style = if i == highlighted {
                Style::default()
                    .fg(th.base)
                    .bg(th.sapphire)
                    .add_modifier(Modifier::BOLD)
            } else if *a == RowAction::Delete {
                Style::default().fg(th.red)
            } else {
                Style::default().fg(th.text)
            };
            ListItem::new(Line::from(Span::styled(a.label(), style)))
        })
        .collect();
    f.render_widget(Clear, rect);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire))
                .style(Style::default().bg(th.mantle)),
        ),
        rect,
    );
}
