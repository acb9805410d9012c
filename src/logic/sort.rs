use std::cmp::Ordering;

use crate::state::{FieldValue, Record, SortDirection, SortSpec};

/// What: Order two optional field values.
///
/// Inputs:
/// - `a`, `b`: Values read from two records (missing values count as empty text)
///
/// Output:
/// - Numeric ordering when both are numbers; otherwise text ordering
///
/// Details:
/// - Text compares case-insensitively first, then by raw text so that the
///   order stays total ("apple" vs "Apple" is decided, not left equal).
/// - NaN compares equal to everything, which keeps the sort stable around it.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    if let (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) = (a, b) {
        return x.partial_cmp(y).unwrap_or(Ordering::Equal);
    }
    let ta = a.map(FieldValue::to_text).unwrap_or_default();
    let tb = b.map(FieldValue::to_text).unwrap_or_default();
    ta.to_lowercase()
        .cmp(&tb.to_lowercase())
        .then_with(|| ta.cmp(&tb))
}

/// What: Stable sort of `records` by a single key.
///
/// Inputs:
/// - `records`: Filtered records, in display order
/// - `spec`: Sort key and direction; `None` leaves the order untouched
///
/// Output:
/// - Sorts `records` in-place; records with equal keys keep their relative order
///
/// Details:
/// - Descending reverses the comparator rather than the result, so ties are
///   still in original order.
/// - Each key is read once per record before sorting.
pub fn sort_records<R: Record>(records: &mut Vec<&R>, spec: Option<&SortSpec>) {
    let Some(spec) = spec else {
        return;
    };
    let mut keyed: Vec<(Option<FieldValue>, &R)> =
        records.drain(..).map(|r| (r.field(&spec.key), r)).collect();
    keyed.sort_by(|(ka, _), (kb, _)| {
        let ord = compare_values(ka.as_ref(), kb.as_ref());
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    records.extend(keyed.into_iter().map(|(_, r)| r));
}

/// A named "Sort by …" action offered by a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPreset {
    /// Menu label (e.g. "Amount: high to low").
    pub label: &'static str,
    /// Field key to sort on.
    pub key: &'static str,
    /// Direction to sort in.
    pub direction: SortDirection,
}

impl SortPreset {
    /// Convert to the spec stored in the view state.
    pub fn spec(&self) -> SortSpec {
        SortSpec::new(self.key, self.direction)
    }

    /// Whether this preset is the one currently applied.
    pub fn matches(&self, spec: &SortSpec) -> bool {
        self.key == spec.key && self.direction == spec.direction
    }
}

/// What: Pick the preset after the currently active one.
///
/// Inputs:
/// - `presets`: Presets offered by the table
/// - `current`: Active sort, if any
///
/// Output:
/// - Next preset; the first one when nothing (or an unlisted sort) is active;
///   `None` when cycling past the last preset or when no presets exist
pub fn next_preset<'a>(
    presets: &'a [SortPreset],
    current: Option<&SortSpec>,
) -> Option<&'a SortPreset> {
    let pos = current.and_then(|c| presets.iter().position(|p| p.matches(c)));
    match pos {
        None => presets.first(),
        Some(i) => presets.get(i + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        id: &'static str,
        count: f64,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            self.id
        }
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "count" => Some(FieldValue::Number(self.count)),
                "name" => Some(self.name.into()),
                _ => None,
            }
        }
    }

    fn ids(rs: &[&Item]) -> Vec<&'static str> {
        rs.iter().map(|r| r.id).collect()
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: "1",
                count: 5.0,
                name: "beta",
            },
            Item {
                id: "2",
                count: 5.0,
                name: "Alpha",
            },
            Item {
                id: "3",
                count: 1.0,
                name: "alpha",
            },
        ]
    }

    #[test]
    /// What: Equal keys keep their relative order in both directions
    ///
    /// - Input: counts [5, 5, 1]
    /// - Output: Ascending [3, 1, 2]; descending [1, 2, 3]
    fn stable_in_both_directions() {
        let data = items();
        let mut v: Vec<&Item> = data.iter().collect();
        sort_records(&mut v, Some(&SortSpec::new("count", SortDirection::Ascending)));
        assert_eq!(ids(&v), vec!["3", "1", "2"]);

        let mut v: Vec<&Item> = data.iter().collect();
        sort_records(&mut v, Some(&SortSpec::new("count", SortDirection::Descending)));
        assert_eq!(ids(&v), vec!["1", "2", "3"]);
    }

    #[test]
    /// What: Text ordering ignores case first, then uses raw text
    ///
    /// - Input: names beta, Alpha, alpha
    /// - Output: Alpha before alpha (raw tiebreak), both before beta
    fn text_order_case_insensitive() {
        let data = items();
        let mut v: Vec<&Item> = data.iter().collect();
        sort_records(&mut v, Some(&SortSpec::new("name", SortDirection::Ascending)));
        assert_eq!(ids(&v), vec!["2", "3", "1"]);
    }

    #[test]
    /// What: No sort spec and unknown keys
    ///
    /// - Input: `None`; a key no record has
    /// - Output: Order unchanged in both cases
    fn none_and_unknown_key_keep_order() {
        let data = items();
        let mut v: Vec<&Item> = data.iter().collect();
        sort_records(&mut v, None);
        assert_eq!(ids(&v), vec!["1", "2", "3"]);
        sort_records(&mut v, Some(&SortSpec::new("missing", SortDirection::Descending)));
        assert_eq!(ids(&v), vec!["1", "2", "3"]);
    }

    #[test]
    /// What: Mixed number/text values fall back to text comparison
    ///
    /// - Input: Number 10 vs text "9"
    /// - Output: "10" < "9" lexicographically
    fn mixed_values_compare_as_text() {
        let a = FieldValue::Number(10.0);
        let b = FieldValue::from("9");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
        assert_eq!(compare_values(None, Some(&b)), Ordering::Less);
    }

    #[test]
    /// What: Preset cycling
    ///
    /// - Input: Two presets; cycle from none, first, second
    /// - Output: first, second, then None
    fn preset_cycle() {
        let presets = [
            SortPreset {
                label: "Newest",
                key: "date",
                direction: SortDirection::Descending,
            },
            SortPreset {
                label: "Oldest",
                key: "date",
                direction: SortDirection::Ascending,
            },
        ];
        let first = next_preset(&presets, None).map(SortPreset::spec);
        assert_eq!(first.as_ref().map(|s| s.direction), Some(SortDirection::Descending));
        let second = next_preset(&presets, first.as_ref()).map(SortPreset::spec);
        assert_eq!(second.as_ref().map(|s| s.direction), Some(SortDirection::Ascending));
        assert!(next_preset(&presets, second.as_ref()).is_none());
    }
}
