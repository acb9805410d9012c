//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing `key = value` configuration files
//! with comment skipping, inline comments and loose boolean spellings.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Keys are lower-cased with `.`, `-` and spaces folded to `_`
/// - Inline comments are removed from the value
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    let value = strip_inline_comment(raw_val.trim()).to_string();
    Some((key, value))
}

/// What: Remove a trailing `# …` or `// …` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Value without the comment, trimmed
pub fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find(" //") {
        s = &s[..i];
    }
    if let Some(i) = s.find(" #") {
        s = &s[..i];
    }
    s.trim()
}

/// What: Interpret loose boolean spellings.
///
/// Inputs:
/// - `val`: Value text
///
/// Output:
/// - `Some(true)` for true/1/yes/on, `Some(false)` for false/0/no/off, `None` otherwise
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
