//! Small utility helpers for dates, money, ids and cell text.
//!
//! Used by the record definitions, the data sources and the renderer.

pub mod config;

use std::fmt::Write;

use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Date layouts accepted in record fields, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%d/%m/%Y"];

/// What: Parse a display date from a record field.
///
/// Inputs:
/// - `s`: Date text such as `2025-09-01` or `Sep 1, 2025`
///
/// Output:
/// - `Some(NaiveDate)` when one of the known layouts matches; `None` otherwise
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Render a date the way record fields store it, e.g. `Sep 1, 2025`.
#[must_use]
pub fn format_display_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// What: Turn a display date into a sortable day number.
///
/// Inputs:
/// - `s`: Date text
///
/// Output:
/// - Days since 1970-01-01, or `None` when the date does not parse
#[must_use]
pub fn date_ordinal(s: &str) -> Option<f64> {
    let d = parse_date(s)?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    // Day counts stay far below 2^53, so the conversion is exact.
    #[allow(clippy::cast_precision_loss)]
    let days = (d - epoch).num_days() as f64;
    Some(days)
}

/// What: Format an amount as dollars with thousands separators.
///
/// Inputs:
/// - `amount`: Value in dollars
///
/// Output:
/// - Text like `$1,200.00` or `-$35.50`
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let cents_total = (amount.abs() * 100.0).round();
    // Amounts in a dashboard fit comfortably in u64 cents.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents_total = cents_total as u64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut out = String::new();
    if amount < 0.0 && cents_total > 0 {
        out.push('-');
    }
    let _ = write!(out, "${grouped}.{cents:02}");
    out
}

/// What: Initials of a person's name.
///
/// Inputs:
/// - `name`: Full name
///
/// Output:
/// - Upper-cased first letter of each word, e.g. `SJ` for `Sarah Johnson`
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// What: Pick the next free id of the form `PREFIX-NNNN`.
///
/// Inputs:
/// - `prefix`: Id prefix such as `C` or `TXN`
/// - `width`: Zero-padded width of the numeric part
/// - `existing`: Ids already in use
///
/// Output:
/// - First id `PREFIX-<n>` (n counting up from `existing.len() + 1`) not present in `existing`
#[must_use]
pub fn next_id<'a, I>(prefix: &str, width: usize, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: std::collections::HashSet<&str> = existing.into_iter().collect();
    let mut n = taken.len() + 1;
    loop {
        let candidate = format!("{prefix}-{n:0width$}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

/// What: Truncate text to a display width, adding an ellipsis when cut.
///
/// Inputs:
/// - `s`: Cell text
/// - `max_width`: Available terminal cells
///
/// Output:
/// - Text whose display width is at most `max_width`
///
/// Details:
/// - Uses `unicode_width` so wide characters (emoji, CJK) are measured correctly.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both dashboard date layouts parse
    ///
    /// - Input: ISO date, short month, long month, garbage
    /// - Output: Same day for the valid layouts; None for garbage
    fn parse_date_layouts() {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1);
        assert_eq!(parse_date("2025-09-01"), d);
        assert_eq!(parse_date("Sep 1, 2025"), d);
        assert_eq!(parse_date("September 01, 2025"), d);
        assert_eq!(parse_date("01/09/2025"), d);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("  "), None);
        assert_eq!(date_ordinal("1970-01-02"), Some(1.0));
    }

    #[test]
    /// What: Currency formatting
    ///
    /// - Input: 1200, 55575.5, 0.5, -35.5
    /// - Output: Grouped dollars with cents and sign
    fn currency() {
        assert_eq!(format_currency(1200.0), "$1,200.00");
        assert_eq!(format_currency(55_575.5), "$55,575.50");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(-35.5), "-$35.50");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567.00");
    }

    #[test]
    /// What: Initials and id generation
    ///
    /// - Input: Two-word name; ids with a gap that collides with the count
    /// - Output: `SJ`; first free id after the collision
    fn initials_and_ids() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  mike  roberts "), "MR");
        assert_eq!(next_id("C", 4, ["C-0001", "C-0003"]), "C-0004");
        assert_eq!(next_id("C", 4, ["C-0001"]), "C-0002");
        assert_eq!(next_id("TXN", 3, []), "TXN-001");
    }

    #[test]
    /// What: Width-aware truncation
    ///
    /// - Input: Short text, long text, emoji text, zero width
    /// - Output: Unchanged, cut with ellipsis, cut by display width, empty
    fn truncation() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("🎨🎨🎨", 4), "🎨…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
