//! Summary counters rendered as stat cards above each table.

use crate::state::Record;

/// One stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card title.
    pub title: String,
    /// Main figure.
    pub value: String,
    /// Optional secondary figure, rendered in parentheses.
    pub sub: Option<String>,
}

impl StatCard {
    /// Card without a secondary figure.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            sub: None,
        }
    }

    /// Attach a secondary figure.
    #[must_use]
    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }
}

/// Count records whose `field` equals `value` (case-insensitive).
pub fn count_where<R: Record>(records: &[R], field: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|r| {
            r.field(field)
                .is_some_and(|v| v.to_text().eq_ignore_ascii_case(value))
        })
        .count()
}

/// What: Sum a numeric field over the records matching a facet.
///
/// Inputs:
/// - `records`: Records to scan
/// - `sum_field`: Numeric field to add up
/// - `facet`: `Some((field, value))` to restrict the scan; `None` for all records
///
/// Output:
/// - `(sum, matched_count)`; non-numeric values count but add nothing
pub fn sum_where<R: Record>(
    records: &[R],
    sum_field: &str,
    facet: Option<(&str, &str)>,
) -> (f64, usize) {
    let mut sum = 0.0;
    let mut n = 0;
    for r in records {
        if let Some((field, value)) = facet
            && !r
                .field(field)
                .is_some_and(|v| v.to_text().eq_ignore_ascii_case(value))
        {
            continue;
        }
        n += 1;
        if let Some(crate::state::FieldValue::Number(x)) = r.field(sum_field) {
            sum += x;
        }
    }
    (sum, n)
}
