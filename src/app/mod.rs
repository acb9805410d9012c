//! Terminal runtime: set up the screen, run the event loop, restore on exit.

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::Result;
use crate::events::handle_event;
use crate::sources::Dataset;
use crate::state::AppState;
use crate::theme::{Settings, exports_dir};
use crate::ui::ui;

mod terminal;

pub use terminal::{restore_terminal, setup_terminal};

/// How long one poll waits for input before the status line and date are re-checked.
const TICK: Duration = Duration::from_millis(250);

/// What: Run the interactive dashboard until the user quits.
///
/// Inputs:
/// - `settings`: Effective settings
/// - `data`: Records for the four pages
///
/// Output:
/// - `Ok(())` on a normal quit; `DashError::Terminal` when the terminal fails
///
/// Details:
/// - The terminal is restored even when the loop fails.
pub fn run(settings: &Settings, data: Dataset) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut app = AppState::new(data, settings, exports_dir(), today);

    setup_terminal()?;
    let result = Terminal::new(CrosstermBackend::new(std::io::stdout()))
        .map_err(Into::into)
        .and_then(|mut terminal| event_loop(&mut terminal, &mut app));
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    result
}

/// Draw, wait for input, dispatch; repeat until a handler asks to quit.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut AppState) -> Result<()> {
    tracing::info!(page = ?app.page, "event loop started");
    loop {
        app.expire_status(Instant::now());
        app.refresh_today(chrono::Local::now().date_naive());
        terminal.draw(|f| ui(f, app))?;
        if event::poll(TICK)? {
            let ev = event::read()?;
            if handle_event(&ev, app) {
                break;
            }
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}
