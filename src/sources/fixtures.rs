//! Built-in demo records used when no dataset file is configured.

use chrono::{Days, NaiveDate};

use crate::sources::Dataset;
use crate::state::records::{
    Collection, Review, ReviewStatus, Transaction, TxnStatus, TxnType, User, UserStatus,
};
use crate::util::format_display_date;

const FIRST_NAMES: [&str; 12] = [
    "John", "Jane", "Michael", "Sarah", "Aliyaan", "Sara", "Ahmed", "Mike", "Priya", "Lucas",
    "Emma", "Omar",
];

const LAST_NAMES: [&str; 9] = [
    "Doe", "Smith", "Brown", "Johnson", "Ahmed", "Khan", "Raza", "Roberts", "Nguyen",
];

const ICONS: [&str; 8] = ["🎨", "📚", "👩‍💻", "🚀", "📊", "💡", "🎯", "📌"];

const PRODUCTS: [&str; 6] = [
    "Smartwatch X200",
    "Wireless Headphones",
    "Fitness Tracker",
    "Mechanical Keyboard",
    "4K Monitor",
    "Noise Cancelling Buds",
];

const COMMENTS: [&str; 5] = [
    "Amazing product, highly recommend!",
    "Good sound quality but a bit pricey.",
    "Average features, battery life could be better.",
    "Stopped working after a week.",
    "Exactly as described, fast shipping.",
];

const METHODS: [&str; 4] = ["Visa", "Mastercard", "PayPal", "Bank transfer"];

/// `base + days`, saturating at `base`.
fn day(base: NaiveDate, days: usize) -> NaiveDate {
    u64::try_from(days)
        .ok()
        .and_then(|n| base.checked_add_days(Days::new(n)))
        .unwrap_or(base)
}

/// Full name for the `i`-th generated person.
fn person(i: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[i % FIRST_NAMES.len()],
        LAST_NAMES[(i * 7 + i / FIRST_NAMES.len()) % LAST_NAMES.len()]
    )
}

/// Reference date the fixtures count from.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

fn users() -> Vec<User> {
    (0..27)
        .map(|i| {
            let name = person(i);
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            User {
                id: format!("U-{:04}", 1001 + i),
                avatar: String::new(),
                email,
                role: ["Admin", "Instructor", "Student", "Student", "Editor"][i % 5].to_string(),
                joined: format_display_date(day(epoch(), i * 9)),
                status: match i % 7 {
                    0 | 2 | 4 | 5 => UserStatus::Active,
                    1 => UserStatus::Pending,
                    3 => UserStatus::Inactive,
                    _ => UserStatus::Suspended,
                },
                ip: format!("10.0.{}.{}", i / 8, 10 + i),
                tags: match i % 3 {
                    0 => vec!["Premium".into(), "Verified".into()],
                    1 => vec!["Free".into()],
                    _ => vec!["Pro".into()],
                },
                name,
            }
        })
        .collect()
}

fn collections() -> Vec<Collection> {
    let titles = [
        "Design Inspiration",
        "Learning Resources",
        "Learning Tools",
        "Rust Reading List",
        "Quarterly Reports",
        "Conference Talks",
        "Onboarding",
        "Product Screenshots",
        "Marketing Assets",
        "Research Papers",
        "Weekend Projects",
        "Team Playbooks",
        "Recipes",
        "Travel Plans",
    ];
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let created = day(epoch(), i * 11);
            Collection {
                id: format!("C-{:04}", i + 1),
                icon: ICONS[i % ICONS.len()].to_string(),
                title: (*title).to_string(),
                kind: if i % 3 == 1 { "Bookmark" } else { "Collection" }.to_string(),
                owner: format!("U-{:04}", 1001 + (i * 5) % 27),
                visibility: ["Featured", "Public", "Private"][i % 3].to_string(),
                created: format_display_date(created),
                count: u32::try_from((i * 37 + 12) % 90).unwrap_or(0),
                modified: format_display_date(day(created, 3 + i % 17)),
                linked_to: String::new(),
            }
        })
        .collect()
}

fn reviews() -> Vec<Review> {
    (0..18)
        .map(|i| Review {
            id: format!("R-{}", 1001 + i),
            user: person(i + 4),
            product: PRODUCTS[i % PRODUCTS.len()].to_string(),
            rating: u8::try_from(5 - (i * 3) % 5).unwrap_or(5),
            comment: COMMENTS[i % COMMENTS.len()].to_string(),
            created: format_display_date(day(epoch(), 180 + i * 4)),
            status: match i % 4 {
                0 | 1 => ReviewStatus::Published,
                2 => ReviewStatus::Pending,
                _ => ReviewStatus::Rejected,
            },
        })
        .collect()
}

fn transactions() -> Vec<Transaction> {
    (0..34)
        .map(|i| {
            let date = day(epoch(), 200 + i * 2);
            let recurring = i % 5 == 0;
            Transaction {
                id: format!("TXN-{:03}", i + 1),
                user: person(i * 2 + 3),
                amount: f64::from(u32::try_from((i * 245 + 95) % 1500 + 5).unwrap_or(5)),
                kind: if i % 3 == 1 {
                    TxnType::Debit
                } else {
                    TxnType::Credit
                },
                status: match i % 6 {
                    0 | 2 | 3 => TxnStatus::Completed,
                    1 => TxnStatus::Failed,
                    _ => TxnStatus::Pending,
                },
                date: format_display_date(date),
                method: METHODS[i % METHODS.len()].to_string(),
                card_number: if i % 4 == 2 {
                    String::new()
                } else {
                    format!("**** {:04}", 4000 + i * 13)
                },
                next_bill: if recurring {
                    format_display_date(day(date, 30))
                } else {
                    String::new()
                },
                linked_to: String::new(),
            }
        })
        .collect()
}

/// What: Build the demo dataset.
///
/// Inputs: none
///
/// Output:
/// - Deterministic records for all four pages, enough to span several table pages
#[must_use]
pub fn demo_dataset() -> Dataset {
    Dataset {
        users: users(),
        collections: collections(),
        reviews: reviews(),
        transactions: transactions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    /// What: Demo ids are unique and dates parse
    ///
    /// - Input: `demo_dataset()`
    /// - Output: No duplicate id per kind; every display date parses back
    fn demo_is_consistent() {
        let d = demo_dataset();
        let ids: HashSet<&str> = d.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), d.transactions.len());
        let ids: HashSet<&str> = d.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), d.users.len());
        assert!(
            d.transactions
                .iter()
                .all(|t| crate::util::parse_date(&t.date).is_some())
        );
        assert!(d.reviews.iter().all(|r| (1..=5).contains(&r.rating)));
        assert_eq!(d.transactions[0].id, "TXN-001");
    }
}
