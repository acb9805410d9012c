//! Library entry for dashview exposing the table engine, state and UI for the
//! binary and for integration tests.

pub mod app;
pub mod args;
pub mod error;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
