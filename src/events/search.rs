use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// What: Handle a key while the search box has focus.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
///
/// Output:
/// - Edits the current table's query (page 1, cursor on the first row) or
///   returns focus to the table on Enter/Esc/Tab
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::Down => {
            app.focus = Focus::Table;
        }
        KeyCode::Backspace => {
            app.table_mut().view_mut().pop_query_char();
            app.table_mut().reset_cursor();
        }
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.table_mut().view_mut().set_query("");
            app.table_mut().reset_cursor();
        }
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            app.table_mut().view_mut().push_query_char(c);
            app.table_mut().reset_cursor();
        }
        _ => {}
    }
}
