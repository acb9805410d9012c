//! Record kinds shown by the dashboard and their table configuration.
//!
//! Each kind implements [`Record`] for the engine and [`Tabular`] for the
//! page that hosts it: columns, searchable fields, facets, sort presets, cell
//! formatting and stat cards.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::logic::sort::SortPreset;
use crate::logic::stats::{StatCard, count_where, sum_where};
use crate::logic::view::{Column, Facet, TableConfig};
use crate::state::{FieldValue, Record, SortDirection};
use crate::util::{date_ordinal, format_currency, initials};

/// Page-level behavior of a record kind.
pub trait Tabular: Record + Clone + Serialize + DeserializeOwned + 'static {
    /// Prefix of generated ids (`C` gives `C-0001`).
    const ID_PREFIX: &'static str;
    /// Zero-padded width of the numeric part of generated ids.
    const ID_WIDTH: usize;

    /// Table configuration of the hosting page.
    fn config() -> &'static TableConfig;

    /// Text shown in the cell of column `key`.
    fn cell(&self, key: &str) -> String {
        self.field(key).map(|v| v.to_text()).unwrap_or_default()
    }

    /// Stat cards shown above the table.
    fn stats(records: &[Self]) -> Vec<StatCard>;
}

/// Shorthand for a preset literal.
const fn preset(label: &'static str, key: &'static str, direction: SortDirection) -> SortPreset {
    SortPreset {
        label,
        key,
        direction,
    }
}

/// Shorthand for a column literal.
const fn col(header: &'static str, key: &'static str, width: u16) -> Column {
    Column { header, key, width }
}

/// Day number of a display date as a field value.
fn date_field(s: &str) -> Option<FieldValue> {
    date_ordinal(s).map(FieldValue::Number)
}

/// Count rendered as a card value.
fn count_card(title: &str, n: usize) -> StatCard {
    StatCard::new(title, n.to_string())
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Account state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserStatus {
    /// Verified and active.
    #[default]
    Active,
    /// Signed up but not seen recently.
    Inactive,
    /// Awaiting verification.
    Pending,
    /// Blocked by an admin.
    Suspended,
}

impl UserStatus {
    /// Display text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }
}

/// Registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, e.g. `U-1001`.
    pub id: String,
    /// Avatar URL or emoji.
    #[serde(default)]
    pub avatar: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role name (Admin, Instructor, Student…).
    pub role: String,
    /// Join date as displayed.
    pub joined: String,
    /// Account state.
    #[serde(default)]
    pub status: UserStatus,
    /// Last known IP address.
    #[serde(default)]
    pub ip: String,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "avatar" => Some(self.avatar.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "joined" => Some(self.joined.as_str().into()),
            "joined_at" => date_field(&self.joined),
            "status" => Some(self.status.as_str().into()),
            "ip" => Some(self.ip.as_str().into()),
            "tags" => Some(self.tags.join(", ").into()),
            _ => None,
        }
    }
}

/// Sort actions of the Users page.
static USER_PRESETS: [SortPreset; 4] = [
    preset("Newest", "joined_at", SortDirection::Descending),
    preset("Oldest", "joined_at", SortDirection::Ascending),
    preset("Name A-Z", "name", SortDirection::Ascending),
    preset("Name Z-A", "name", SortDirection::Descending),
];

/// Table configuration of the Users page.
static USER_CONFIG: TableConfig = TableConfig {
    noun: "users",
    searchable: &["name", "email", "id", "role"],
    columns: &[
        col("ID", "id", 12),
        col("Name", "name", 20),
        col("Email", "email", 26),
        col("Role", "role", 10),
        col("Status", "status", 10),
        col("Joined", "joined", 13),
        col("Tags", "tags", 18),
    ],
    facets: &[Facet {
        label: "Status",
        field: "status",
        values: &["Active", "Inactive", "Pending", "Suspended"],
    }],
    date_field: Some("joined"),
    sort_presets: &USER_PRESETS,
};

impl Tabular for User {
    const ID_PREFIX: &'static str = "U";
    const ID_WIDTH: usize = 4;

    fn config() -> &'static TableConfig {
        &USER_CONFIG
    }

    fn cell(&self, key: &str) -> String {
        match key {
            // Avatar badge: the stored emoji, or the name's initials.
            "name" if self.avatar.is_empty() || self.avatar.starts_with("http") => {
                format!("{} {}", initials(&self.name), self.name)
            }
            "name" => format!("{} {}", self.avatar, self.name),
            _ => self.field(key).map(|v| v.to_text()).unwrap_or_default(),
        }
    }

    fn stats(records: &[Self]) -> Vec<StatCard> {
        vec![
            count_card("Total Users", records.len()),
            count_card("Active", count_where(records, "status", "Active")),
            count_card("Pending", count_where(records, "status", "Pending")),
            count_card("Suspended", count_where(records, "status", "Suspended")),
            count_card("Inactive", count_where(records, "status", "Inactive")),
            count_card("Instructors", count_where(records, "role", "Instructor")),
            count_card("Students", count_where(records, "role", "Student")),
        ]
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Collection or bookmark list owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Unique id, e.g. `C-0001`.
    pub id: String,
    /// Emoji shown before the title.
    #[serde(default)]
    pub icon: String,
    /// Title.
    pub title: String,
    /// `Collection` or `Bookmark`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Owner user id.
    pub owner: String,
    /// `Featured`, `Public` or `Private`.
    pub visibility: String,
    /// Creation date as displayed.
    pub created: String,
    /// Number of items.
    #[serde(default)]
    pub count: u32,
    /// Last modification date as displayed.
    #[serde(default)]
    pub modified: String,
    /// Linked collection id, empty when none.
    #[serde(default)]
    pub linked_to: String,
}

impl Record for Collection {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "icon" => Some(self.icon.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "type" => Some(self.kind.as_str().into()),
            "owner" => Some(self.owner.as_str().into()),
            "visibility" => Some(self.visibility.as_str().into()),
            "created" => Some(self.created.as_str().into()),
            "created_at" => date_field(&self.created),
            "count" => Some(self.count.into()),
            "modified" => Some(self.modified.as_str().into()),
            "modified_at" => date_field(&self.modified),
            "linked_to" => Some(self.linked_to.as_str().into()),
            _ => None,
        }
    }
}

/// Sort actions of the Collections page.
static COLLECTION_PRESETS: [SortPreset; 5] = [
    preset("Most items", "count", SortDirection::Descending),
    preset("Fewest items", "count", SortDirection::Ascending),
    preset("Title A-Z", "title", SortDirection::Ascending),
    preset("Newest", "created_at", SortDirection::Descending),
    preset("Recently modified", "modified_at", SortDirection::Descending),
];

/// Table configuration of the Collections page.
static COLLECTION_CONFIG: TableConfig = TableConfig {
    noun: "collections",
    searchable: &["title", "id"],
    columns: &[
        col("ID", "id", 12),
        col("Title", "title", 24),
        col("Type", "type", 10),
        col("Owner", "owner", 12),
        col("Visibility", "visibility", 10),
        col("Items", "count", 6),
        col("Created", "created", 13),
        col("Modified", "modified", 13),
    ],
    facets: &[Facet {
        label: "Visibility",
        field: "visibility",
        values: &["Featured", "Public", "Private"],
    }],
    date_field: Some("created"),
    sort_presets: &COLLECTION_PRESETS,
};

impl Tabular for Collection {
    const ID_PREFIX: &'static str = "C";
    const ID_WIDTH: usize = 4;

    fn config() -> &'static TableConfig {
        &COLLECTION_CONFIG
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "title" if !self.icon.is_empty() => format!("{} {}", self.icon, self.title),
            _ => self.field(key).map(|v| v.to_text()).unwrap_or_default(),
        }
    }

    fn stats(records: &[Self]) -> Vec<StatCard> {
        let (items, _) = sum_where(records, "count", None);
        vec![
            count_card("Collections", count_where(records, "type", "Collection")),
            count_card("Bookmarks", count_where(records, "type", "Bookmark")),
            StatCard::new("Total Items", format!("{items}")),
            count_card("Featured", count_where(records, "visibility", "Featured")),
        ]
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// Moderation state of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReviewStatus {
    /// Visible to everyone.
    Published,
    /// Waiting for moderation.
    #[default]
    Pending,
    /// Hidden by a moderator.
    Rejected,
}

impl ReviewStatus {
    /// Display text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }
}

/// Product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique id, e.g. `R-1001`.
    pub id: String,
    /// Reviewer name.
    pub user: String,
    /// Reviewed product.
    pub product: String,
    /// Stars, 1-5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// Creation date as displayed.
    pub created: String,
    /// Moderation state.
    #[serde(default)]
    pub status: ReviewStatus,
}

impl Record for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "user" => Some(self.user.as_str().into()),
            "product" => Some(self.product.as_str().into()),
            "rating" => Some(FieldValue::Number(f64::from(self.rating))),
            "comment" => Some(self.comment.as_str().into()),
            "created" => Some(self.created.as_str().into()),
            "created_at" => date_field(&self.created),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }
}

/// Sort actions of the Reviews page.
static REVIEW_PRESETS: [SortPreset; 4] = [
    preset("Highest rated", "rating", SortDirection::Descending),
    preset("Lowest rated", "rating", SortDirection::Ascending),
    preset("Newest", "created_at", SortDirection::Descending),
    preset("Oldest", "created_at", SortDirection::Ascending),
];

/// Table configuration of the Reviews page.
static REVIEW_CONFIG: TableConfig = TableConfig {
    noun: "reviews",
    searchable: &["user", "product"],
    columns: &[
        col("ID", "id", 8),
        col("User", "user", 16),
        col("Product", "product", 20),
        col("Rating", "rating", 7),
        col("Comment", "comment", 34),
        col("Created", "created", 13),
        col("Status", "status", 10),
    ],
    facets: &[
        Facet {
            label: "Status",
            field: "status",
            values: &["Published", "Pending", "Rejected"],
        },
        Facet {
            label: "Rating",
            field: "rating",
            values: &["1", "2", "3", "4", "5"],
        },
    ],
    date_field: Some("created"),
    sort_presets: &REVIEW_PRESETS,
};

impl Tabular for Review {
    const ID_PREFIX: &'static str = "R";
    const ID_WIDTH: usize = 4;

    fn config() -> &'static TableConfig {
        &REVIEW_CONFIG
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "rating" => {
                let full = usize::from(self.rating.min(5));
                format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
            }
            _ => self.field(key).map(|v| v.to_text()).unwrap_or_default(),
        }
    }

    fn stats(records: &[Self]) -> Vec<StatCard> {
        vec![
            count_card("All Reviews", records.len()),
            count_card("Published", count_where(records, "status", "Published")),
            count_card("Rejected", count_where(records, "status", "Rejected")),
            count_card("Pending", count_where(records, "status", "Pending")),
        ]
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TxnType {
    /// Money received.
    #[default]
    Credit,
    /// Money paid out.
    Debit,
}

impl TxnType {
    /// Display text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }

    /// What: Parse a type from form input.
    ///
    /// Inputs: `s` text (case-insensitive)
    ///
    /// Output: `Some(TxnType)` on recognized value; `None` otherwise
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "c" | "in" => Some(Self::Credit),
            "debit" | "d" | "out" => Some(Self::Debit),
            _ => None,
        }
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TxnStatus {
    /// Settled.
    Completed,
    /// In flight.
    #[default]
    Pending,
    /// Declined or errored.
    Failed,
}

impl TxnStatus {
    /// Display text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

/// Payment transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique id, e.g. `TXN-001`.
    pub id: String,
    /// Paying user name.
    pub user: String,
    /// Amount in dollars.
    pub amount: f64,
    /// Credit or debit.
    #[serde(rename = "type")]
    pub kind: TxnType,
    /// Settlement state.
    pub status: TxnStatus,
    /// Transaction date as displayed.
    pub date: String,
    /// Payment method (Visa, PayPal…).
    #[serde(default)]
    pub method: String,
    /// Masked card number.
    #[serde(default)]
    pub card_number: String,
    /// Next billing date, empty for one-off payments.
    #[serde(default)]
    pub next_bill: String,
    /// Linked subscription or order.
    #[serde(default)]
    pub linked_to: String,
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "user" => Some(self.user.as_str().into()),
            "amount" => Some(FieldValue::Number(self.amount)),
            "type" => Some(self.kind.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            "date_at" => date_field(&self.date),
            "method" => Some(self.method.as_str().into()),
            "card_number" => Some(self.card_number.as_str().into()),
            "next_bill" => Some(self.next_bill.as_str().into()),
            "linked_to" => Some(self.linked_to.as_str().into()),
            _ => None,
        }
    }
}

/// Sort actions of the Transactions page.
static TRANSACTION_PRESETS: [SortPreset; 6] = [
    preset("Newest", "date_at", SortDirection::Descending),
    preset("Oldest", "date_at", SortDirection::Ascending),
    preset("Amount: high to low", "amount", SortDirection::Descending),
    preset("Amount: low to high", "amount", SortDirection::Ascending),
    preset("Name A-Z", "user", SortDirection::Ascending),
    preset("Name Z-A", "user", SortDirection::Descending),
];

/// Table configuration of the Transactions page.
static TRANSACTION_CONFIG: TableConfig = TableConfig {
    noun: "transactions",
    searchable: &["user", "id"],
    columns: &[
        col("ID", "id", 9),
        col("User", "user", 20),
        col("Amount", "amount", 12),
        col("Type", "type", 7),
        col("Status", "status", 10),
        col("Date", "date", 13),
        col("Method", "method", 12),
        col("Next bill", "next_bill", 13),
    ],
    facets: &[Facet {
        label: "Status",
        field: "status",
        values: &["Completed", "Pending", "Failed"],
    }],
    date_field: Some("date"),
    sort_presets: &TRANSACTION_PRESETS,
};

impl Tabular for Transaction {
    const ID_PREFIX: &'static str = "TXN";
    const ID_WIDTH: usize = 3;

    fn config() -> &'static TableConfig {
        &TRANSACTION_CONFIG
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "amount" => format_currency(self.amount),
            _ => self.field(key).map(|v| v.to_text()).unwrap_or_default(),
        }
    }

    fn stats(records: &[Self]) -> Vec<StatCard> {
        let money = |title: &str, facet: Option<(&str, &str)>| {
            let (sum, n) = sum_where(records, "amount", facet);
            StatCard::new(title, format_currency(sum)).with_sub(n.to_string())
        };
        vec![
            money("All Transactions", None),
            money("Completed", Some(("status", "Completed"))),
            money("Failed", Some(("status", "Failed"))),
            money("Pending", Some(("status", "Pending"))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: &str, amount: f64, status: TxnStatus, date: &str) -> Transaction {
        Transaction {
            id: id.into(),
            user: "Sarah Johnson".into(),
            amount,
            kind: TxnType::Credit,
            status,
            date: date.into(),
            method: "Visa".into(),
            card_number: String::new(),
            next_bill: String::new(),
            linked_to: String::new(),
        }
    }

    #[test]
    /// What: Transaction cells and stat cards
    ///
    /// - Input: Two transactions, one completed, one failed
    /// - Output: Currency cell; sums and counts per status
    fn transaction_cells_and_stats() {
        let data = vec![
            txn("TXN-001", 1200.0, TxnStatus::Completed, "Sep 1, 2025"),
            txn("TXN-002", 350.0, TxnStatus::Failed, "Sep 2, 2025"),
        ];
        assert_eq!(data[0].cell("amount"), "$1,200.00");
        assert_eq!(data[0].cell("status"), "Completed");
        let stats = Transaction::stats(&data);
        assert_eq!(stats[0].value, "$1,550.00");
        assert_eq!(stats[0].sub.as_deref(), Some("2"));
        assert_eq!(stats[2].value, "$350.00");
        assert_eq!(stats[3].sub.as_deref(), Some("0"));
    }

    #[test]
    /// What: Date-valued sort keys are numeric
    ///
    /// - Input: Transaction dated Sep 2, 2025
    /// - Output: `date_at` is a number one greater than Sep 1
    fn date_keys_are_numbers() {
        let a = txn("TXN-001", 1.0, TxnStatus::Pending, "Sep 1, 2025");
        let b = txn("TXN-002", 1.0, TxnStatus::Pending, "2025-09-02");
        match (a.field("date_at"), b.field("date_at")) {
            (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
                assert!((y - x - 1.0).abs() < f64::EPSILON);
            }
            other => panic!("expected numbers, got {other:?}"),
        }
    }

    #[test]
    /// What: JSON shape uses camelCase and the `type` key
    ///
    /// - Input: Collection JSON as exported by the web dashboard
    /// - Output: Deserializes; rating stars render for reviews
    fn json_shape() {
        let c: Collection = serde_json::from_str(
            r#"{"id":"C-1","icon":"🎨","title":"Design Inspiration","type":"Collection",
                "owner":"U-1","visibility":"Featured","created":"Feb 15, 2025","count":48,
                "modified":"Feb 27, 2025","linkedTo":""}"#,
        )
        .expect("collection json");
        assert_eq!(c.kind, "Collection");
        assert_eq!(c.cell("title"), "🎨 Design Inspiration");
        let r = Review {
            id: "R-1".into(),
            user: "Sara Khan".into(),
            product: "Headphones".into(),
            rating: 4,
            comment: String::new(),
            created: "Sep 2, 2025".into(),
            status: ReviewStatus::Published,
        };
        assert_eq!(r.cell("rating"), "★★★★☆");
    }

    #[test]
    /// What: User stat cards count statuses and roles
    ///
    /// - Input: Three users: active instructor, inactive student, suspended student
    /// - Output: Inactive 1, Instructors 1, Students 2, Suspended 1
    fn user_stats_cover_roles_and_inactive() {
        let user = |id: &str, role: &str, status: UserStatus| User {
            id: id.into(),
            avatar: String::new(),
            name: "Test User".into(),
            email: String::new(),
            role: role.into(),
            joined: "Jan 6, 2025".into(),
            status,
            ip: String::new(),
            tags: Vec::new(),
        };
        let data = vec![
            user("U-1", "Instructor", UserStatus::Active),
            user("U-2", "Student", UserStatus::Inactive),
            user("U-3", "student", UserStatus::Suspended),
        ];
        let stats = User::stats(&data);
        let value = |title: &str| {
            stats
                .iter()
                .find(|c| c.title == title)
                .map(|c| c.value.clone())
        };
        assert_eq!(value("Total Users").as_deref(), Some("3"));
        assert_eq!(value("Inactive").as_deref(), Some("1"));
        assert_eq!(value("Suspended").as_deref(), Some("1"));
        assert_eq!(value("Instructors").as_deref(), Some("1"));
        assert_eq!(value("Students").as_deref(), Some("2"));
    }

    #[test]
    /// What: Reviews offer status and rating facets
    ///
    /// - Input: Review config; a 4-star review
    /// - Output: Rating facet values 1-5; the review's rating field matches "4"
    fn review_rating_facet() {
        let rating = Review::config().facet_for("rating").expect("rating facet");
        assert_eq!(rating.values, ["1", "2", "3", "4", "5"]);
        assert!(Review::config().facet_for("status").is_some());
        let r = Review {
            id: "R-1".into(),
            user: "Sara Khan".into(),
            product: "Headphones".into(),
            rating: 4,
            comment: String::new(),
            created: "Sep 2, 2025".into(),
            status: ReviewStatus::Published,
        };
        assert_eq!(r.field("rating").map(|v| v.to_text()).as_deref(), Some("4"));
    }

    #[test]
    /// What: User name cell carries an avatar badge
    ///
    /// - Input: User without avatar, then with an emoji avatar
    /// - Output: Initials prefix, then the emoji prefix
    fn user_name_badge() {
        let mut u: User = serde_json::from_str(
            r#"{"id":"U-1001","name":"Sarah Johnson","email":"sarah@example.com",
                "role":"Admin","joined":"Jan 6, 2025"}"#,
        )
        .expect("user json");
        assert_eq!(u.cell("name"), "SJ Sarah Johnson");
        u.avatar = "🦊".into();
        assert_eq!(u.cell("name"), "🦊 Sarah Johnson");
        assert_eq!(u.cell("email"), "sarah@example.com");
    }
}
