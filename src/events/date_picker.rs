use crossterm::event::{KeyCode, KeyEvent};

use super::close_modal;
use crate::state::{AppState, DatePickerModal, Modal};

/// What: Handle a key while the date range picker is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
/// - `picker`: Picker taken out of the modal slot
///
/// Output:
/// - Picker updated and put back, applied, or dismissed
///
/// Details:
/// - Arrows / hjkl move the highlighted day; Enter or Space selects it.
/// - `[` / `]` (or PageUp / PageDown) flip the month.
/// - `a` applies, `c` clears the selection, Esc closes without applying.
pub(super) fn handle_picker_key(ke: KeyEvent, app: &mut AppState, mut picker: DatePickerModal) {
    match ke.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            close_modal(app);
            return;
        }
        KeyCode::Char('a') => {
            app.apply_date_picker(picker);
            return;
        }
        KeyCode::Left | KeyCode::Char('h') => picker.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => picker.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => picker.move_cursor(-7),
        KeyCode::Down | KeyCode::Char('j') => picker.move_cursor(7),
        KeyCode::PageUp | KeyCode::Char('[' | '<') => picker.shift_month(-1),
        KeyCode::PageDown | KeyCode::Char(']' | '>') => picker.shift_month(1),
        KeyCode::Enter | KeyCode::Char(' ') => picker.pick(),
        KeyCode::Char('c') => {
            picker.picker.clear();
            picker.notice = None;
        }
        KeyCode::Char('t') => {
            picker.cursor = app.today;
            picker.picker.show_month_of(app.today);
        }
        _ => {}
    }
    app.modal = Modal::DatePicker(picker);
}
