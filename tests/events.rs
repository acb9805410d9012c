//! Key-driven flows through `dashview::events::handle_key`.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dashview::events::handle_key;
use dashview::sources::fixtures::demo_dataset;
use dashview::state::{AppState, Focus, Modal, Page};
use dashview::theme::Settings;

fn app(dir: &std::path::Path) -> AppState {
    AppState::new(
        demo_dataset(),
        &Settings::default(),
        dir.to_path_buf(),
        NaiveDate::from_ymd_opt(2025, 9, 14).expect("valid date"),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Press each key in order; returns whether the last one asked to quit.
fn press(app: &mut AppState, codes: &[KeyCode]) -> bool {
    let mut quit = false;
    for c in codes {
        quit = handle_key(key(*c), app);
    }
    quit
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_key(key(KeyCode::Char(c)), app);
    }
}

#[test]
/// What: Quit keys
///
/// - Input: `q` on the table, Ctrl-C inside the search box
/// - Output: Both request exit
fn quit_from_table_and_search() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    assert!(press(&mut app, &[KeyCode::Char('q')]));

    press(&mut app, &[KeyCode::Char('/')]);
    assert_eq!(app.focus, Focus::Search);
    assert!(handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut app
    ));
}

#[test]
/// What: Searching while on a later page
///
/// - Input: Go to page 3, type a query, press Enter
/// - Output: Page resets to 1, `q` typed in the box does not quit, focus returns
fn search_resets_page_and_captures_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    press(&mut app, &[KeyCode::End]);
    assert_eq!(app.table().snapshot().page.current_page, 3);

    press(&mut app, &[KeyCode::Char('/')]);
    type_text(&mut app, "q");
    assert_eq!(app.table().view().state().search_query, "q");
    assert_eq!(app.table().snapshot().page.current_page, 1);
    press(&mut app, &[KeyCode::Backspace, KeyCode::Enter]);
    assert_eq!(app.focus, Focus::Table);
    assert!(app.table().view().state().search_query.is_empty());
}

#[test]
/// What: Select, confirm delete, then cancel a second delete
///
/// - Input: Space on two rows, `x`, Enter; then Space, `x`, Esc
/// - Output: Two users removed; cancel keeps the third
fn select_and_delete_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    let before = app.users.records().len();
    press(
        &mut app,
        &[
            KeyCode::Char(' '),
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Char('x'),
        ],
    );
    assert!(matches!(&app.modal, Modal::ConfirmDelete { ids } if ids.len() == 2));
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.modal.is_none());
    assert_eq!(app.users.records().len(), before - 2);
    assert_eq!(app.table().view().state().selection.selected_count(), 0);

    press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('x'), KeyCode::Esc]);
    assert!(app.modal.is_none());
    assert_eq!(app.users.records().len(), before - 2);
}

#[test]
/// What: Row menu opens, moves, and closes on an outside key
///
/// - Input: `m`, `j`, then Tab
/// - Output: Menu open after `m`; Tab closes it and switches page
fn row_menu_outside_key_closes_and_applies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    press(&mut app, &[KeyCode::Char('m')]);
    assert!(app.row_menu_open());
    press(&mut app, &[KeyCode::Char('j')]);
    assert_eq!(app.menu_index, 1);
    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.page, Page::Collections);
    app.switch_page(Page::Users);
    assert!(!app.row_menu_open());
}

#[test]
/// What: Row menu Details action
///
/// - Input: `m` then Enter on the first row
/// - Output: Details modal for that row's id
fn row_menu_details() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    let first = app.table().cursor_id().expect("row");
    press(&mut app, &[KeyCode::Char('m'), KeyCode::Enter]);
    assert!(matches!(&app.modal, Modal::Details { id, .. } if *id == first));
    press(&mut app, &[KeyCode::Esc]);
    assert!(app.modal.is_none());
}

#[test]
/// What: Date range picker through the keyboard
///
/// - Input: On Transactions, `d`, pick today, 7 days back, pick, `a`
/// - Output: Range applied; every visible row lies inside it; `D` clears it
fn date_picker_keys_apply_range() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    press(&mut app, &[KeyCode::Char('4'), KeyCode::Char('d')]);
    assert!(matches!(app.modal, Modal::DatePicker(_)));

    press(&mut app, &[KeyCode::Char('a')]);
    assert!(matches!(&app.modal, Modal::DatePicker(p) if p.notice.is_some()));

    press(&mut app, &[KeyCode::Enter, KeyCode::Up, KeyCode::Enter, KeyCode::Char('a')]);
    assert!(app.modal.is_none());
    let range = app
        .table()
        .view()
        .state()
        .date_range
        .expect("range applied");
    assert_eq!(range.from, NaiveDate::from_ymd_opt(2025, 9, 7).expect("date"));
    assert_eq!(range.to, NaiveDate::from_ymd_opt(2025, 9, 14).expect("date"));
    let visible = app.table().visible_len();
    assert!(visible < app.transactions.records().len());

    press(&mut app, &[KeyCode::Char('D')]);
    assert!(app.table().view().state().date_range.is_none());
}

#[test]
/// What: New payment through the form
///
/// - Input: `n` on Transactions, type user and amount, Enter
/// - Output: One more transaction, with status Pending
fn payment_form_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    app.switch_page(Page::Transactions);
    let before = app.transactions.records().len();
    press(&mut app, &[KeyCode::Char('n')]);
    assert!(matches!(app.modal, Modal::Form(_)));
    type_text(&mut app, "Dana Scully");
    press(&mut app, &[KeyCode::Tab]);
    type_text(&mut app, "120.50");
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.modal.is_none());
    assert_eq!(app.transactions.records().len(), before + 1);
}

#[test]
/// What: Page size and sort keys
///
/// - Input: `+` then `s`, then `S`
/// - Output: 20 rows per page; a sort preset active, then cleared
fn page_size_and_sort_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    press(&mut app, &[KeyCode::Char('+')]);
    assert_eq!(app.table().view().state().items_per_page, 20);
    assert_eq!(app.table().snapshot().rows.len(), 20);
    press(&mut app, &[KeyCode::Char('s')]);
    assert!(app.table().view().state().sort.is_some());
    press(&mut app, &[KeyCode::Char('S')]);
    assert!(app.table().view().state().sort.is_none());
}

#[test]
/// What: Review reasons editor through the keyboard
///
/// - Input: On Reviews, `R`, type a reason containing `q`, Enter, Up, Delete, Esc
/// - Output: Typing `q` does not quit; the reason is added; the one above it is removed
fn review_reasons_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = app(dir.path());
    press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('R')]);
    assert!(matches!(app.modal, Modal::Reasons(_)));
    for c in "Off-topic question".chars() {
        assert!(!handle_key(key(KeyCode::Char(c)), &mut app));
    }
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.review_reasons.len(), 6);
    assert_eq!(app.review_reasons[5], "Off-topic question");
    press(&mut app, &[KeyCode::Up, KeyCode::Delete]);
    assert_eq!(app.review_reasons.len(), 5);
    assert!(!app.review_reasons.iter().any(|r| r == "Not as described"));
    press(&mut app, &[KeyCode::Esc]);
    assert!(app.modal.is_none());

    press(&mut app, &[KeyCode::Char('A'), KeyCode::Char('r')]);
    assert!(app.auto_approve);
    assert_eq!(app.table().view().state().facet_value("rating"), Some("1"));
}
