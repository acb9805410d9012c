//! Modal dialogs drawn over the page.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

mod common;
mod date_picker;
mod form;
mod help;
mod reasons;

use common::render_simple_list_modal;

/// What: Render the open modal, if any.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: Application state
/// - `area`: Full screen area
///
/// Output:
/// - Draws the dialog centered over `area`
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => {
            let mut lines: Vec<Line<'static>> = message
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
                .collect();
            lines.push(Line::from(""));
            lines.push(dismiss_hint());
            render_simple_list_modal(f, area, "Alert", lines, th.red);
        }
        Modal::Help => help::render_help(f, area),
        Modal::Details { id, lines } => {
            let width = lines.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
            let mut body: Vec<Line<'static>> = lines
                .iter()
                .map(|(k, v)| {
                    Line::from(vec![
                        Span::styled(format!("{k:<width$}"), Style::default().fg(th.overlay1)),
                        Span::styled(v.clone(), Style::default().fg(th.text)),
                    ])
                })
                .collect();
            body.push(Line::from(""));
            body.push(dismiss_hint());
            render_simple_list_modal(f, area, id, body, th.sapphire);
        }
        Modal::ConfirmDelete { ids } => {
            let noun = app.table().view().config().noun;
            let mut lines = vec![Line::from(Span::styled(
                format!("Delete {} {noun}?", ids.len()),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ))];
            let shown = ids.iter().take(8).cloned().collect::<Vec<_>>().join(", ");
            let more = ids.len().saturating_sub(8);
            lines.push(Line::from(Span::styled(
                if more > 0 {
                    format!("{shown} and {more} more")
                } else {
                    shown
                },
                Style::default().fg(th.subtext0),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Enter/y", Style::default().fg(th.red).add_modifier(Modifier::BOLD)),
                Span::styled(" delete   ", Style::default().fg(th.overlay1)),
                Span::styled("Esc/n", Style::default().fg(th.sapphire)),
                Span::styled(" cancel", Style::default().fg(th.overlay1)),
            ]));
            render_simple_list_modal(f, area, "Confirm delete", lines, th.red);
        }
        Modal::Form(form) => form::render_form(f, area, form),
        Modal::DatePicker(picker) => date_picker::render_date_picker(f, area, picker, app.today),
        Modal::Reasons(m) => reasons::render_reasons(f, area, &app.review_reasons, m),
    }
}

/// Footer line telling how to close an informational dialog.
fn dismiss_hint() -> Line<'static> {
    Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(theme().overlay1),
    ))
}
