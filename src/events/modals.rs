use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{close_modal, date_picker};
use crate::state::{AppState, Modal, ReasonsModal};

/// What: Handle a key while a modal dialog is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
///
/// Output:
/// - Updates or closes the dialog; confirmed actions are applied to the current table
///
/// Details:
/// - The modal is taken out of the state while its handler runs and put back
///   unless the handler closed or replaced it.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    match std::mem::take(&mut app.modal) {
        Modal::None => {}
        m @ (Modal::Alert { .. } | Modal::Help | Modal::Details { .. }) => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => close_modal(app),
            _ => app.modal = m,
        },
        Modal::ConfirmDelete { ids } => match ke.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => app.confirm_delete(&ids),
            KeyCode::Esc | KeyCode::Char('n' | 'N' | 'q') => {
                close_modal(app);
                app.set_status("Delete cancelled");
            }
            _ => app.modal = Modal::ConfirmDelete { ids },
        },
        Modal::Form(mut form) => match ke.code {
            KeyCode::Esc => close_modal(app),
            KeyCode::Enter => app.submit_form(form),
            KeyCode::Tab | KeyCode::Down => {
                form.move_focus(1);
                app.modal = Modal::Form(form);
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.move_focus(-1);
                app.modal = Modal::Form(form);
            }
            KeyCode::Right => {
                form.cycle_choice(true);
                app.modal = Modal::Form(form);
            }
            KeyCode::Left => {
                form.cycle_choice(false);
                app.modal = Modal::Form(form);
            }
            KeyCode::Backspace => {
                form.pop_char();
                app.modal = Modal::Form(form);
            }
            KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c);
                app.modal = Modal::Form(form);
            }
            _ => app.modal = Modal::Form(form),
        },
        Modal::DatePicker(picker) => date_picker::handle_picker_key(ke, app, picker),
        Modal::Reasons(reasons) => handle_reasons_key(ke, app, reasons),
    }
}

/// What: Handle a key in the review reasons editor.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state (owns the reason list)
/// - `m`: Editor state taken out of the modal slot
///
/// Output:
/// - Typing edits the new reason, Enter adds it, Delete removes the
///   highlighted one, arrows move, Esc closes
fn handle_reasons_key(ke: KeyEvent, app: &mut AppState, mut m: ReasonsModal) {
    match ke.code {
        KeyCode::Esc => {
            close_modal(app);
            return;
        }
        KeyCode::Enter => {
            if app.add_review_reason(&m.input) {
                m.input.clear();
                m.cursor = app.review_reasons.len().saturating_sub(1);
            }
        }
        KeyCode::Delete => {
            if let Some(removed) = app.delete_review_reason(m.cursor) {
                app.set_status(format!("Removed reason: {removed}"));
            }
            m.clamp(app.review_reasons.len());
        }
        KeyCode::Up => m.move_cursor(-1, app.review_reasons.len()),
        KeyCode::Down => m.move_cursor(1, app.review_reasons.len()),
        KeyCode::Backspace => {
            m.input.pop();
        }
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => m.input.push(c),
        _ => {}
    }
    app.modal = Modal::Reasons(m);
}
