//! Rendering for dashview's TUI.
//!
//! One frame is: page tabs, stat cards, search/filter bar, the table with its
//! row menu, the pagination bar and a footer; an open modal draws on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
mod header;
mod modals;
mod table;

/// Height of one row of stat cards.
const STATS_ROW_HEIGHT: u16 = 4;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state
///
/// Output:
/// - Draws the whole screen; does not mutate state
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let snap = app.table().snapshot();
    let stats_h = if app.show_stats && !snap.stats.is_empty() {
        let rows = snap.stats.len().div_ceil(header::STATS_PER_ROW);
        STATS_ROW_HEIGHT.saturating_mul(u16::try_from(rows).unwrap_or(1))
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(stats_h),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_tabs(f, app, chunks[0]);
    if stats_h > 0 {
        header::render_stats(f, &snap.stats, chunks[1]);
    }
    header::render_toolbar(f, app, &snap, chunks[2]);
    table::render_table(f, app, &snap, chunks[3]);
    footer::render_pagination(f, &snap, chunks[4]);
    footer::render_footer(f, app, chunks[5]);

    modals::render_modal(f, app, area);
}
