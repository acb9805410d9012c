//! Settings, palette and config directory layout.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Path resolution for config directories.
mod paths;
/// Settings parsing and loading.
mod settings;
/// Palette and settings type definitions.
mod types;

pub use paths::{config_dir, exports_dir, logs_dir};
pub use settings::{SETTINGS_SKELETON_CONTENT, load_settings_from, parse_settings, settings};
pub use types::{Settings, Theme};

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
