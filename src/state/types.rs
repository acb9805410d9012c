//! Core value types shared by the table engine and the front end.

use std::fmt;

/// A single field value read from a record.
///
/// Sorting compares two `Number`s numerically and everything else as text.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Free text (names, ids, statuses, display dates).
    Text(String),
    /// Numeric value (counts, amounts, ratings, day ordinals).
    Number(f64),
}

impl FieldValue {
    /// What: Coerce the value to its text form.
    ///
    /// Inputs: none
    ///
    /// Output: Owned string; numbers use their shortest `Display` form.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// Anything that can be shown as a table row.
///
/// Ids are assumed unique within one collection. Nothing in the engine
/// re-validates that; the data provider enforces it on insert.
pub trait Record {
    /// Unique identifier of the record.
    fn id(&self) -> &str;
    /// Field accessor by key; `None` when the record has no such field.
    fn field(&self, key: &str) -> Option<FieldValue>;
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        (**self).field(key)
    }
}

/// Sort direction for a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// What: Parse a direction suffix such as `asc` or `desc`.
    ///
    /// Inputs: `s` direction text (case-insensitive).
    ///
    /// Output: `Some(SortDirection)` on recognized value; `None` otherwise.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(Self::Ascending),
            "desc" | "descending" | "down" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Short arrow used in headers.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort: which field, which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field key passed to [`Record::field`].
    pub key: String,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Build a sort spec from a key and direction.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// What: Parse `key` or `key:asc|desc` from the command line.
    ///
    /// Inputs: `s` sort text.
    ///
    /// Output: `Some(SortSpec)` when the key is non-empty and the direction (if any) is known.
    pub fn parse(s: &str) -> Option<Self> {
        let (key, dir) = match s.split_once(':') {
            Some((k, d)) => (k.trim(), SortDirection::from_config_key(d)?),
            None => (s.trim(), SortDirection::Ascending),
        };
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, dir))
    }
}

/// Dashboard pages, one table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Registered users.
    #[default]
    Users,
    /// Collections and bookmarks.
    Collections,
    /// Product reviews.
    Reviews,
    /// Payment transactions.
    Transactions,
}

impl Page {
    /// All pages in tab order.
    pub const ALL: [Self; 4] = [
        Self::Users,
        Self::Collections,
        Self::Reviews,
        Self::Transactions,
    ];

    /// Tab title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Collections => "Collections",
            Self::Reviews => "Reviews",
            Self::Transactions => "Transactions",
        }
    }

    /// Return the string key used in settings files and on the command line.
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Collections => "collections",
            Self::Reviews => "reviews",
            Self::Transactions => "transactions",
        }
    }

    /// What: Parse a page from its settings key or a short alias.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(Page)` on recognized value; `None` otherwise.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "users" | "user" | "u" => Some(Self::Users),
            "collections" | "collection" | "c" => Some(Self::Collections),
            "reviews" | "review" | "r" => Some(Self::Reviews),
            "transactions" | "transaction" | "payments" | "t" => Some(Self::Transactions),
            _ => None,
        }
    }

    /// Position of this page in [`Page::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Users => 0,
            Self::Collections => 1,
            Self::Reviews => 2,
            Self::Transactions => 3,
        }
    }

    /// Next tab, wrapping around.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which input currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Row navigation and table shortcuts.
    #[default]
    Table,
    /// The search box.
    Search,
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, Page, SortDirection, SortSpec};

    #[test]
    /// What: Page config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn page_config_roundtrip_and_aliases() {
        for p in Page::ALL {
            assert_eq!(Page::from_config_key(p.as_config_key()), Some(p));
        }
        assert_eq!(Page::from_config_key("Payments"), Some(Page::Transactions));
        assert_eq!(Page::from_config_key(" c "), Some(Page::Collections));
        assert_eq!(Page::from_config_key("orders"), None);
        assert_eq!(Page::Transactions.next(), Page::Users);
        assert_eq!(Page::Users.prev(), Page::Transactions);
    }

    #[test]
    /// What: Sort spec parsing from `key[:dir]`
    ///
    /// - Input: Bare key, key with desc, bad direction, empty key
    /// - Output: Ascending default, Descending parsed, None for the rest
    fn sort_spec_parse() {
        assert_eq!(
            SortSpec::parse("count"),
            Some(SortSpec::new("count", SortDirection::Ascending))
        );
        assert_eq!(
            SortSpec::parse("amount:DESC"),
            Some(SortSpec::new("amount", SortDirection::Descending))
        );
        assert_eq!(SortSpec::parse("amount:sideways"), None);
        assert_eq!(SortSpec::parse(":asc"), None);
    }

    #[test]
    /// What: Field values coerce to text
    ///
    /// - Input: Text and integral number
    /// - Output: Text unchanged, number without trailing `.0`
    fn field_value_to_text() {
        assert_eq!(FieldValue::from("Active").to_text(), "Active");
        assert_eq!(FieldValue::Number(48.0).to_text(), "48");
        assert_eq!(FieldValue::Number(49.5).to_string(), "49.5");
    }
}
