//! Core non-UI logic: the table engine and its building blocks.

pub mod date_range;
pub mod filter;
pub mod menu;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod stats;
pub mod view;

// Re-export public APIs so callers can use `crate::logic::...` directly
pub use date_range::{DateRange, DateRangePicker, DayCell, PickerPhase};
pub use filter::{filter_by_date_range, filter_by_facet, filter_records};
pub use menu::ActiveMenu;
pub use pagination::{PAGE_SIZES, PageInfo, PageNav};
pub use selection::{HeaderCheck, SelectionSet};
pub use sort::{SortPreset, sort_records};
pub use stats::StatCard;
pub use view::{Column, Facet, RowView, TableConfig, TableView, ViewSnapshot, ViewState};
