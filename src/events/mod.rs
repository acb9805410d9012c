//! Event handling layer for dashview's TUI.
//!
//! This module exposes `handle_event` and delegates focus- and modal-specific
//! key handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, Modal};

mod date_picker;
mod modals;
mod search;
mod table;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    handle_key(*ke, app)
}

/// What: Route one key press.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the application should exit
///
/// Details:
/// - Priority: Ctrl-C, open modal, search box, open row menu, table keys.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        tracing::info!("quit via ctrl-c");
        return true;
    }
    if !app.modal.is_none() {
        modals::handle_modal_key(ke, app);
        return false;
    }
    if app.focus == Focus::Search {
        search::handle_search_key(ke, app);
        return false;
    }
    if app.row_menu_open() {
        return table::handle_menu_key(ke, app);
    }
    table::handle_table_key(ke, app)
}

/// Close any open dialog.
fn close_modal(app: &mut AppState) {
    app.modal = Modal::None;
}
