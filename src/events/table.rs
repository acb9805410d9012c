use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::PageNav;
use crate::state::{AppState, Focus, Modal, Page};

/// What: Handle a key while the table has focus and no menu is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the key asks to quit
pub(super) fn handle_table_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => {
            tracing::info!("quit requested");
            return true;
        }
        KeyCode::Tab => app.switch_page(app.page.next()),
        KeyCode::BackTab => app.switch_page(app.page.prev()),
        KeyCode::Char(c @ '1'..='4') => {
            let target = c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| Page::ALL.get(d - 1).copied());
            if let Some(p) = target {
                app.switch_page(p);
            }
        }
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('j') | KeyCode::Down => app.table_mut().move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.table_mut().move_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
            app.table_mut().navigate(PageNav::Next);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
            app.table_mut().navigate(PageNav::Previous);
        }
        KeyCode::Char('g') | KeyCode::Home => app.table_mut().navigate(PageNav::First),
        KeyCode::Char('G') | KeyCode::End => app.table_mut().navigate(PageNav::Last),
        KeyCode::Char('+' | '=') => app.table_mut().step_page_size(true),
        KeyCode::Char('-' | '_') => app.table_mut().step_page_size(false),
        KeyCode::Char(' ') => {
            app.toggle_cursor_row();
        }
        KeyCode::Char('a') => app.table_mut().toggle_all(),
        KeyCode::Char('s') => {
            let label = app.table_mut().view_mut().cycle_sort_preset().map(|p| p.label);
            match label {
                Some(l) => app.set_status(format!("Sort: {l}")),
                None => app.set_status("Sort cleared"),
            }
        }
        KeyCode::Char('S') => {
            app.table_mut().view_mut().clear_sort();
            app.set_status("Sort cleared");
        }
        KeyCode::Char('f') => app.cycle_facet(0),
        KeyCode::Char('r') => app.cycle_facet(1),
        KeyCode::Char('A') => app.toggle_auto_approve(),
        KeyCode::Char('R') => app.open_review_reasons(),
        KeyCode::Char('d') => app.open_date_picker(),
        KeyCode::Char('D') => app.clear_date_range(),
        KeyCode::Char('m') | KeyCode::Enter => app.toggle_row_menu(),
        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('e') => app.export_selected(),
        KeyCode::Char('t') => app.show_stats = !app.show_stats,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Esc => {
            if app.table().view().state().selection.is_empty() {
                return false;
            }
            app.table_mut().view_mut().clear_selection();
            app.set_status("Selection cleared");
        }
        _ => {}
    }
    false
}

/// What: Handle a key while a row's action menu is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
///
/// Output:
/// - Moves the highlight, runs the highlighted action, or closes the menu;
///   any other key closes the menu and is then handled as a table key
///   (`true` when that key asks to quit)
pub(super) fn handle_menu_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_menu_index(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_menu_index(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.run_row_action(),
        KeyCode::Esc | KeyCode::Char('m') => app.table_mut().view_mut().menu_mut().close(),
        _ => {
            app.table_mut().view_mut().menu_mut().close();
            // Outside interaction: the menu closes, the key still applies.
            return handle_table_key(ke, app);
        }
    }
    false
}
