//! Shared utilities for argument processing.

use crate::args::Args;
use crate::logic::pagination::is_allowed_page_size;
use crate::state::Page;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge command-line flags into the settings read from disk.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings to update in place
///
/// Output:
/// - None; invalid flag values are logged and the settings value is kept
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(path) = &args.data {
        settings.data_file = Some(path.clone());
    }
    if let Some(start) = args.start.as_deref() {
        match Page::from_config_key(start) {
            Some(p) => settings.start_page = p,
            None => tracing::warn!(value = start, "unknown --start page; keeping setting"),
        }
    }
    if let Some(n) = args.per_page {
        if is_allowed_page_size(n) {
            settings.items_per_page = n;
        } else {
            tracing::warn!(value = n, "unsupported --per-page; keeping setting");
        }
    }
}
