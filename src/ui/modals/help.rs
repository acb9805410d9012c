use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::common::render_simple_list_modal;
use crate::theme::theme;

/// Key bindings shown in the help dialog, grouped by section.
const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("Tab / Shift-Tab", "next / previous page"),
            ("1-4", "jump to a page"),
            ("t", "show or hide stat cards"),
        ],
    ),
    (
        "Table",
        &[
            ("/", "search (Enter or Esc to leave)"),
            ("j / k", "move the row cursor"),
            ("h / l", "previous / next page"),
            ("g / G", "first / last page"),
            ("+ / -", "page size"),
            ("Space", "select row"),
            ("a", "select all visible / none"),
            ("Esc", "clear the selection"),
            ("s / S", "next sort preset / clear sort"),
            ("f", "cycle status filter"),
            ("r", "cycle rating filter (Reviews)"),
            ("d / D", "pick dates / clear dates"),
            ("m or Enter", "row actions"),
        ],
    ),
    (
        "Records",
        &[
            ("n", "create (Collections, Transactions)"),
            ("x", "delete selected"),
            ("e", "export selected as JSON"),
            ("A", "toggle auto-approve (Reviews)"),
            ("R", "manage review reasons (Reviews)"),
            ("q", "quit"),
        ],
    ),
];

/// Render the key bindings overview.
pub fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, (section, keys)) in HELP.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for (key, what) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), Style::default().fg(th.sapphire)),
                Span::styled(*what, Style::default().fg(th.text)),
            ]));
        }
    }
    render_simple_list_modal(f, area, "Help", lines, th.mauve);
}
