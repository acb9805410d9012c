//! Central `AppState` container: the four page tables plus UI chrome.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::sources::Dataset;
use crate::state::modal::Modal;
use crate::state::page_table::{PageTable, TableOps};
use crate::state::records::{Collection, Review, Transaction, User};
use crate::state::types::{Focus, Page};
use crate::theme::Settings;

mod methods;


/// Reasons offered to moderators before any are added or removed.
pub const DEFAULT_REVIEW_REASONS: [&str; 5] = [
    "Great content and insights",
    "Excellent quality and value",
    "Well-written and informative",
    "Poor quality or content",
    "Not as described",
];

/// Global application state shared by the event handlers and the renderer.
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown.
    pub page: Page,
    /// Users page table.
    pub users: PageTable<User>,
    /// Collections page table.
    pub collections: PageTable<Collection>,
    /// Reviews page table.
    pub reviews: PageTable<Review>,
    /// Transactions page table.
    pub transactions: PageTable<Transaction>,
    /// Which input receives typed characters.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Highlighted entry of the open row menu.
    pub menu_index: usize,
    /// Whether the stat cards row is rendered.
    pub show_stats: bool,
    /// Footer status message.
    pub status_message: Option<String>,
    /// When the footer status message disappears.
    pub status_expires_at: Option<Instant>,
    /// How long status messages stay visible.
    pub status_timeout: Duration,
    /// Where selection exports are written.
    pub exports_dir: PathBuf,
    /// Date used for the picker's today marker and form dates.
    pub today: NaiveDate,
    /// Whether new reviews skip moderation (Reviews page toggle).
    pub auto_approve: bool,
    /// Moderation reasons managed from the Reviews page.
    pub review_reasons: Vec<String>,
}

impl AppState {
    /// What: Build the application state.
    ///
    /// Inputs:
    /// - `data`: Records for the four pages
    /// - `settings`: Effective settings (file merged with command-line flags)
    /// - `exports_dir`: Target directory for selection exports
    /// - `today`: Local date
    ///
    /// Output:
    /// - State showing `settings.start_page` with every table on page 1
    pub fn new(data: Dataset, settings: &Settings, exports_dir: PathBuf, today: NaiveDate) -> Self {
        let per_page = settings.items_per_page;
        Self {
            page: settings.start_page,
            users: PageTable::new(data.users, per_page),
            collections: PageTable::new(data.collections, per_page),
            reviews: PageTable::new(data.reviews, per_page),
            transactions: PageTable::new(data.transactions, per_page),
            focus: Focus::Table,
            modal: Modal::None,
            menu_index: 0,
            show_stats: settings.show_stats,
            status_message: None,
            status_expires_at: None,
            status_timeout: Duration::from_secs(settings.status_timeout_secs),
            exports_dir,
            today,
            auto_approve: false,
            review_reasons: DEFAULT_REVIEW_REASONS.into_iter().map(String::from).collect(),
        }
    }

    /// Table of `page`.
    pub fn table_for(&self, page: Page) -> &dyn TableOps {
        match page {
            Page::Users => &self.users,
            Page::Collections => &self.collections,
            Page::Reviews => &self.reviews,
            Page::Transactions => &self.transactions,
        }
    }

    /// Mutable table of `page`.
    pub fn table_for_mut(&mut self, page: Page) -> &mut dyn TableOps {
        match page {
            Page::Users => &mut self.users,
            Page::Collections => &mut self.collections,
            Page::Reviews => &mut self.reviews,
            Page::Transactions => &mut self.transactions,
        }
    }

    /// Table of the current page.
    pub fn table(&self) -> &dyn TableOps {
        self.table_for(self.page)
    }

    /// Mutable table of the current page.
    pub fn table_mut(&mut self) -> &mut dyn TableOps {
        self.table_for_mut(self.page)
    }
}
