//! One page's table: provider, view engine and row cursor bundled together.
//!
//! [`TableOps`] is the object-safe face the event handlers and the renderer
//! use, so they never need to know which record kind a page holds.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logic::pagination::{self, PageInfo, PageNav};
use crate::logic::{Column, HeaderCheck, StatCard, TableView};
use crate::sources::{DataProvider, InMemoryProvider, export_records};
use crate::state::records::Tabular;

/// One rendered row, with cells already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    /// Record id.
    pub id: String,
    /// Cell text per column.
    pub cells: Vec<String>,
    /// Checkbox state.
    pub selected: bool,
    /// Whether the row's action menu is open.
    pub menu_open: bool,
}

/// Owned render state of a table for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Columns in display order.
    pub columns: &'static [Column],
    /// Rows of the current page.
    pub rows: Vec<SnapshotRow>,
    /// Header checkbox state.
    pub header: HeaderCheck,
    /// Pagination bar state.
    pub page: PageInfo,
    /// Stat cards over the whole collection.
    pub stats: Vec<StatCard>,
    /// Size of the unfiltered collection.
    pub total_records: usize,
    /// Selected ids, visible or not.
    pub selected_count: usize,
    /// Row cursor within `rows`.
    pub cursor: usize,
}

/// Operations every page table supports regardless of record kind.
pub trait TableOps {
    /// Engine state (query, sort, filters, selection).
    fn view(&self) -> &TableView;
    /// Mutable engine state.
    fn view_mut(&mut self) -> &mut TableView;
    /// Render state for the current frame.
    fn snapshot(&self) -> TableSnapshot;
    /// Size of the visible set across all pages.
    fn visible_len(&self) -> usize;
    /// Number of records held by the provider.
    fn record_count(&self) -> usize;
    /// Row cursor within the current page.
    fn cursor(&self) -> usize;
    /// Move the row cursor by `delta`, clamped to the current page.
    fn move_cursor(&mut self, delta: isize);
    /// Put the cursor on the first row.
    fn reset_cursor(&mut self);
    /// Id of the record under the cursor.
    fn cursor_id(&self) -> Option<String>;
    /// Pagination request against the visible set; resets the cursor.
    fn navigate(&mut self, nav: PageNav);
    /// Step the page size up or down through the allowed sizes.
    fn step_page_size(&mut self, larger: bool);
    /// Header checkbox action.
    fn toggle_all(&mut self);
    /// Delete records by id; returns how many were removed.
    fn delete(&mut self, ids: &[String]) -> usize;
    /// `(header, value)` pairs of every column of one record.
    fn details(&self, id: &str) -> Option<Vec<(String, String)>>;
    /// Write the selected records as JSON into `dir`; `None` when nothing is selected.
    fn export_selected(&self, dir: &Path) -> Result<Option<PathBuf>>;
}

/// Table of one record kind.
#[derive(Debug, Clone)]
pub struct PageTable<R: Tabular> {
    /// Record store.
    provider: InMemoryProvider<R>,
    /// Engine state.
    view: TableView,
    /// Row cursor within the current page.
    cursor: usize,
}

impl<R: Tabular> PageTable<R> {
    /// What: Build a table over `records`.
    ///
    /// Inputs:
    /// - `records`: Initial collection
    /// - `items_per_page`: Initial page size
    ///
    /// Output:
    /// - Table on page 1 with the cursor on the first row
    pub fn new(records: Vec<R>, items_per_page: usize) -> Self {
        Self {
            provider: InMemoryProvider::new(records),
            view: TableView::new(R::config(), items_per_page),
            cursor: 0,
        }
    }

    /// Records in provider order.
    pub fn records(&self) -> &[R] {
        self.provider.list()
    }

    /// Ids in provider order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.provider.list().iter().map(|r| r.id())
    }

    /// What: Add a record created by a form.
    ///
    /// Inputs:
    /// - `record`: Complete record
    ///
    /// Output:
    /// - `Ok(())`; `DashError::DuplicateId` when the id is taken
    pub fn create(&mut self, record: R) -> Result<()> {
        self.provider.create(record)
    }

    /// Number of rows on the current page.
    fn rows_on_page(&self) -> usize {
        self.view
            .page_info(self.visible_len())
            .slice_range()
            .len()
    }
}

impl<R: Tabular> TableOps for PageTable<R> {
    fn view(&self) -> &TableView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut TableView {
        &mut self.view
    }

    fn snapshot(&self) -> TableSnapshot {
        let records = self.provider.list();
        let snap = self.view.snapshot(records);
        let columns = self.view.config().columns;
        let rows: Vec<SnapshotRow> = snap
            .rows
            .iter()
            .map(|row| SnapshotRow {
                id: row.record.id().to_string(),
                cells: columns.iter().map(|c| row.record.cell(c.key)).collect(),
                selected: row.selected,
                menu_open: row.menu_open,
            })
            .collect();
        let cursor = self.cursor.min(rows.len().saturating_sub(1));
        TableSnapshot {
            columns,
            rows,
            header: snap.header,
            page: snap.page,
            stats: R::stats(records),
            total_records: snap.total_records,
            selected_count: snap.selected_count,
            cursor,
        }
    }

    fn visible_len(&self) -> usize {
        self.view.visible(self.provider.list()).len()
    }

    fn record_count(&self) -> usize {
        self.provider.len()
    }

    fn cursor(&self) -> usize {
        self.cursor.min(self.rows_on_page().saturating_sub(1))
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.rows_on_page().saturating_sub(1);
        let cur = self.cursor.min(last);
        self.cursor = cur.saturating_add_signed(delta).min(last);
        self.view.menu_mut().close();
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn cursor_id(&self) -> Option<String> {
        let visible = self.view.visible(self.provider.list());
        let page = self.view.page_info(visible.len());
        visible[page.slice_range()]
            .get(self.cursor())
            .map(|r| r.id().to_string())
    }

    fn navigate(&mut self, nav: PageNav) {
        let total = self.visible_len();
        self.view.navigate(nav, total);
        self.cursor = 0;
    }

    fn step_page_size(&mut self, larger: bool) {
        let cur = self.view.state().items_per_page;
        let next = if larger {
            pagination::next_page_size(cur)
        } else {
            pagination::previous_page_size(cur)
        };
        self.view.set_items_per_page(next);
        self.cursor = 0;
    }

    fn toggle_all(&mut self) {
        self.view.toggle_all(self.provider.list());
    }

    fn delete(&mut self, ids: &[String]) -> usize {
        let mut removed = 0;
        for id in ids {
            if self.provider.remove(id).is_some() {
                removed += 1;
            }
            self.view.forget(id);
        }
        tracing::info!(noun = self.view.config().noun, removed, "records deleted");
        removed
    }

    fn details(&self, id: &str) -> Option<Vec<(String, String)>> {
        let record = self.provider.list().iter().find(|r| r.id() == id)?;
        Some(
            self.view
                .config()
                .columns
                .iter()
                .map(|c| (c.header.to_string(), record.cell(c.key)))
                .collect(),
        )
    }

    fn export_selected(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let chosen: Vec<R> = self
            .provider
            .list()
            .iter()
            .filter(|r| self.view.is_selected(r.id()))
            .cloned()
            .collect();
        if chosen.is_empty() {
            return Ok(None);
        }
        export_records(dir, self.view.config().noun, &chosen).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::fixtures::demo_dataset;
    use crate::state::records::Transaction;

    fn table() -> PageTable<Transaction> {
        PageTable::new(demo_dataset().transactions, 10)
    }

    #[test]
    /// What: Cursor is clamped to the rows of the current page
    ///
    /// - Input: 34 transactions, 10 per page; move far down, jump to last page
    /// - Output: Cursor 9 on page 1; cursor 0 and 4 rows on page 4
    fn cursor_clamps() {
        let mut t = table();
        t.move_cursor(50);
        assert_eq!(t.cursor(), 9);
        assert_eq!(t.cursor_id().as_deref(), Some("TXN-010"));
        t.navigate(PageNav::Last);
        let snap = t.snapshot();
        assert_eq!(snap.page.current_page, 4);
        assert_eq!(snap.rows.len(), 4);
        assert_eq!(snap.cursor, 0);
        t.move_cursor(-3);
        assert_eq!(t.cursor(), 0);
    }

    #[test]
    /// What: Deleting prunes selection and shrinks the collection
    ///
    /// - Input: Select two rows, delete them plus an unknown id
    /// - Output: Two removed; selection empty; stat card totals follow
    fn delete_prunes() {
        let mut t = table();
        t.view_mut().toggle("TXN-001");
        t.view_mut().toggle("TXN-002");
        let ids = t.view().selected_ids();
        let removed = t.delete(&[ids[0].clone(), ids[1].clone(), "TXN-999".into()]);
        assert_eq!(removed, 2);
        assert_eq!(t.record_count(), 32);
        assert_eq!(t.snapshot().selected_count, 0);
        assert_eq!(t.snapshot().stats[0].sub.as_deref(), Some("32"));
    }

    #[test]
    /// What: Snapshot cells use the record's formatting
    ///
    /// - Input: First page of demo transactions
    /// - Output: Amount cell formatted as currency; details list every column
    fn snapshot_cells() {
        let t = table();
        let snap = t.snapshot();
        let amount_col = snap
            .columns
            .iter()
            .position(|c| c.key == "amount")
            .expect("amount column");
        assert!(snap.rows[0].cells[amount_col].starts_with('$'));
        let details = t.details("TXN-001").expect("record exists");
        assert_eq!(details.len(), snap.columns.len());
        assert!(t.details("nope").is_none());
    }

    #[test]
    /// What: Export writes only selected records
    ///
    /// - Input: Nothing selected, then one selected
    /// - Output: `None`, then a file containing one transaction
    fn export_selected_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut t = table();
        assert!(t.export_selected(dir.path()).expect("export").is_none());
        t.view_mut().toggle("TXN-005");
        let path = t
            .export_selected(dir.path())
            .expect("export")
            .expect("file written");
        let body = std::fs::read_to_string(path).expect("read");
        let back: Vec<Transaction> = serde_json::from_str(&body).expect("parse");
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, "TXN-005");
    }
}
