//! Application state: record kinds, page tables, modals and forms.
//!
//! Public re-exports keep the common types reachable as `crate::state::*`.

pub mod app_state;
pub mod forms;
pub mod modal;
pub mod page_table;
pub mod records;
pub mod types;

pub use app_state::AppState;
pub use modal::{DatePickerModal, Modal, ReasonsModal, RowAction};
pub use page_table::{PageTable, SnapshotRow, TableOps, TableSnapshot};
pub use records::{Collection, Review, Tabular, Transaction, User};
pub use types::{FieldValue, Focus, Page, Record, SortDirection, SortSpec};
