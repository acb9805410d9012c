use std::fs;
use std::path::{Path, PathBuf};

use crate::state::Page;
use crate::theme::paths::{config_dir, resolve_settings_config_path};
use crate::theme::types::Settings;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// Commented settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# dashview settings\n\
#\n\
# Format: key = value. Lines starting with #, // or ; are comments.\n\
# Command-line flags override these values.\n\
#\n\
# Rows per table page: 5, 10, 20, 25, 50 or 100\n\
items_per_page = 10\n\
#\n\
# Page shown on start-up: users, collections, reviews, transactions\n\
start_page = users\n\
#\n\
# Show the stat cards above each table\n\
show_stats = true\n\
#\n\
# Seconds a status message stays in the footer\n\
status_timeout_secs = 4\n\
#\n\
# JSON dataset to load instead of the built-in demo records\n\
# data_file = /path/to/dataset.json\n";

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Output:
/// - None (modifies `settings` in-place)
///
/// Details:
/// - Unknown keys are ignored; invalid values keep the current value and log a warning.
/// - `items_per_page` must be one of the allowed page sizes.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let accepted = match key.as_str() {
            "items_per_page" | "page_size" | "per_page" => match val.parse::<usize>() {
                Ok(v) if crate::logic::pagination::is_allowed_page_size(v) => {
                    settings.items_per_page = v;
                    true
                }
                _ => false,
            },
            "start_page" | "page" => Page::from_config_key(&val)
                .map(|p| settings.start_page = p)
                .is_some(),
            "show_stats" | "stats_visible" => parse_bool(&val)
                .map(|b| settings.show_stats = b)
                .is_some(),
            "status_timeout_secs" | "toast_secs" => val
                .parse::<u64>()
                .map(|v| settings.status_timeout_secs = v)
                .is_ok(),
            "data_file" | "dataset" => {
                settings.data_file = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val.as_str()))
                };
                true
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
                true
            }
        };
        if !accepted {
            tracing::warn!(key = %key, value = %val, "invalid settings value; keeping default");
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Load user settings from the config directory.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - When no settings file exists yet, a commented skeleton is written to
///   `<config_dir>/settings.conf` so users have something to edit.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        let s = load_settings_from(&path);
        tracing::info!(path = %path.display(), "loaded settings");
        return s;
    }
    let target = config_dir().join("settings.conf");
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "could not write settings skeleton");
        }
    }
    Settings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Settings keys, aliases and invalid values
    ///
    /// - Input: Content with valid keys, an alias, an invalid page size, an unknown key
    /// - Output: Valid values applied; invalid page size ignored
    fn parse_known_and_invalid_keys() {
        let mut s = Settings::default();
        parse_settings(
            "# comment\n\
             per_page = 25\n\
             start-page = Transactions\n\
             show_stats = off\n\
             status_timeout_secs = 9\n\
             data_file = /tmp/demo.json # local copy\n\
             colour = red\n",
            &mut s,
        );
        assert_eq!(s.items_per_page, 25);
        assert_eq!(s.start_page, Page::Transactions);
        assert!(!s.show_stats);
        assert_eq!(s.status_timeout_secs, 9);
        assert_eq!(s.data_file, Some(PathBuf::from("/tmp/demo.json")));

        parse_settings("items_per_page = 15\nstart_page = nowhere\n", &mut s);
        assert_eq!(s.items_per_page, 25);
        assert_eq!(s.start_page, Page::Transactions);
    }

    #[test]
    /// What: The skeleton parses to the defaults
    ///
    /// - Input: `SETTINGS_SKELETON_CONTENT`
    /// - Output: `Settings::default()`
    fn skeleton_matches_defaults() {
        let mut s = Settings::default();
        parse_settings(SETTINGS_SKELETON_CONTENT, &mut s);
        assert_eq!(s, Settings::default());
    }
}
