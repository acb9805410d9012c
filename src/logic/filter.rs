use crate::logic::date_range::DateRange;
use crate::state::Record;

/// What: Keep records where any of `fields` contains `query`, ignoring case.
///
/// Inputs:
/// - `records`: Records in display order
/// - `query`: Search text as typed; empty passes everything
/// - `fields`: Field keys to search
///
/// Output:
/// - References to the matching records, original relative order kept
///
/// Details:
/// - Missing fields never match. Numeric fields are searched through their text form.
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    query: &str,
    fields: &[&str],
) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_query(*r, &needle, fields))
        .collect()
}

/// Whether one record matches an already lower-cased needle.
fn matches_query<R: Record>(record: &R, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|key| {
        record
            .field(key)
            .is_some_and(|v| v.to_text().to_lowercase().contains(needle))
    })
}

/// What: Keep records whose `field` equals `value`, ignoring case.
///
/// Inputs:
/// - `records`: Records to filter
/// - `field`: Facet field key (e.g. `status`)
/// - `value`: Facet value selected in the "Filter by" menu
///
/// Output:
/// - Matching records in original order
pub fn filter_by_facet<'a, R: Record>(records: &[&'a R], field: &str, value: &str) -> Vec<&'a R> {
    records
        .iter()
        .copied()
        .filter(|r| {
            r.field(field)
                .is_some_and(|v| v.to_text().eq_ignore_ascii_case(value))
        })
        .collect()
}

/// What: Keep records whose date `field` falls inside `range` (inclusive).
///
/// Inputs:
/// - `records`: Records to filter
/// - `field`: Field key holding a display date
/// - `range`: Finalized range from the date picker
///
/// Output:
/// - Matching records in original order
///
/// Details:
/// - Dates that cannot be parsed are excluded while a range is active.
pub fn filter_by_date_range<'a, R: Record>(
    records: &[&'a R],
    field: &str,
    range: &DateRange,
) -> Vec<&'a R> {
    records
        .iter()
        .copied()
        .filter(|r| {
            r.field(field)
                .and_then(|v| crate::util::parse_date(&v.to_text()))
                .is_some_and(|d| range.contains(d))
        })
        .collect()
}
