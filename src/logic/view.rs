//! Generic table view: one engine for every record kind.
//!
//! A [`TableView`] owns the transient [`ViewState`] of one table and turns a
//! record slice into what the table, its header and its pagination bar show.
//! Pipeline order is fixed: search → facets → date range → sort → page slice.

use std::collections::BTreeMap;

use crate::logic::date_range::DateRange;
use crate::logic::filter::{filter_by_date_range, filter_by_facet, filter_records};
use crate::logic::menu::ActiveMenu;
use crate::logic::pagination::{self, PageInfo, PageNav};
use crate::logic::selection::{HeaderCheck, SelectionSet};
use crate::logic::sort::{SortPreset, next_preset, sort_records};
use crate::state::{Record, SortSpec};

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub header: &'static str,
    /// Field key rendered in this column.
    pub key: &'static str,
    /// Preferred width in terminal cells.
    pub width: u16,
}

/// Discrete "Filter by" values for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    /// Menu and toolbar label ("Status", "Rating").
    pub label: &'static str,
    /// Field key the facet filters on.
    pub field: &'static str,
    /// Values offered, in menu order.
    pub values: &'static [&'static str],
}

/// Field configuration supplied by the hosting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Plural noun for labels ("users", "transactions").
    pub noun: &'static str,
    /// Fields searched by the query box.
    pub searchable: &'static [&'static str],
    /// Columns in display order.
    pub columns: &'static [Column],
    /// "Filter by" menus, in key order (`f` drives the first, `r` the second).
    pub facets: &'static [Facet],
    /// Field holding the date used by the date range filter.
    pub date_field: Option<&'static str>,
    /// "Sort by" actions offered by the table.
    pub sort_presets: &'static [SortPreset],
}

impl TableConfig {
    /// Facet filtering on `field`, if the table offers one.
    pub fn facet_for(&self, field: &str) -> Option<&'static Facet> {
        self.facets.iter().find(|f| f.field == field)
    }
}

/// Transient per-table state, created on mount and dropped on unmount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Search text.
    pub search_query: String,
    /// Active sort; `None` keeps filtered order.
    pub sort: Option<SortSpec>,
    /// Selected record ids.
    pub selection: SelectionSet,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Page size, one of [`pagination::PAGE_SIZES`].
    pub items_per_page: usize,
    /// Active facet values by field key.
    pub facet_filters: BTreeMap<&'static str, String>,
    /// Active date range.
    pub date_range: Option<DateRange>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort: None,
            selection: SelectionSet::new(),
            current_page: 1,
            items_per_page: pagination::DEFAULT_PAGE_SIZE,
            facet_filters: BTreeMap::new(),
            date_range: None,
        }
    }
}

impl ViewState {
    /// Active value of the facet on `field`.
    pub fn facet_value(&self, field: &str) -> Option<&str> {
        self.facet_filters.get(field).map(String::as_str)
    }
}

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a, R> {
    /// Underlying record.
    pub record: &'a R,
    /// Whether the row checkbox is ticked.
    pub selected: bool,
    /// Whether this row's action menu is open.
    pub menu_open: bool,
}

/// Everything needed to render a table for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot<'a, R> {
    /// Rows of the current page.
    pub rows: Vec<RowView<'a, R>>,
    /// Header checkbox state over the visible set.
    pub header: HeaderCheck,
    /// Pagination bar state.
    pub page: PageInfo,
    /// Ids of every record in the visible set (all pages).
    pub visible_ids: Vec<&'a str>,
    /// Size of the unfiltered collection.
    pub total_records: usize,
    /// Number of selected ids, visible or hidden.
    pub selected_count: usize,
}

/// Table engine for one page.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Field configuration.
    config: &'static TableConfig,
    /// Search/sort/selection/page state.
    state: ViewState,
    /// Open row menu.
    menu: ActiveMenu,
}

impl TableView {
    /// What: Create a view with default state.
    ///
    /// Inputs:
    /// - `config`: Field configuration of the page
    /// - `items_per_page`: Initial page size (falls back to the default when not allowed)
    ///
    /// Output:
    /// - Fresh `TableView` on page 1 with nothing selected
    pub fn new(config: &'static TableConfig, items_per_page: usize) -> Self {
        let per_page = if pagination::is_allowed_page_size(items_per_page) {
            items_per_page
        } else {
            pagination::DEFAULT_PAGE_SIZE
        };
        Self {
            config,
            state: ViewState {
                items_per_page: per_page,
                ..ViewState::default()
            },
            menu: ActiveMenu::default(),
        }
    }

    /// Field configuration.
    pub const fn config(&self) -> &'static TableConfig {
        self.config
    }

    /// Current state.
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Open row menu.
    pub const fn menu(&self) -> &ActiveMenu {
        &self.menu
    }

    /// Mutable access to the row menu.
    pub const fn menu_mut(&mut self) -> &mut ActiveMenu {
        &mut self.menu
    }

    /// What: Apply search, facet, date range and sort to `records`.
    ///
    /// Inputs:
    /// - `records`: Full collection in provider order
    ///
    /// Output:
    /// - The visible set (all pages), in display order
    pub fn visible<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        let mut rows = filter_records(records, &self.state.search_query, self.config.searchable);
        for (field, value) in &self.state.facet_filters {
            rows = filter_by_facet(&rows, field, value);
        }
        if let (Some(field), Some(range)) = (self.config.date_field, &self.state.date_range) {
            rows = filter_by_date_range(&rows, field, range);
        }
        sort_records(&mut rows, self.state.sort.as_ref());
        rows
    }

    /// Pagination state for a visible set of `total_items`.
    pub fn page_info(&self, total_items: usize) -> PageInfo {
        pagination::compute(
            self.state.current_page,
            total_items,
            self.state.items_per_page,
        )
    }

    /// What: Build the render snapshot for `records`.
    ///
    /// Inputs:
    /// - `records`: Full collection in provider order
    ///
    /// Output:
    /// - Rows of the current page with selection flags, header state and page info
    pub fn snapshot<'a, R: Record>(&self, records: &'a [R]) -> ViewSnapshot<'a, R> {
        let visible = self.visible(records);
        let page = self.page_info(visible.len());
        let visible_ids: Vec<&'a str> = visible.iter().copied().map(|r| r.id()).collect();
        let header = self
            .state
            .selection
            .header_state(visible_ids.iter().copied());
        let rows = visible[page.slice_range()]
            .iter()
            .map(|r| RowView {
                record: *r,
                selected: self.state.selection.is_selected(r.id()),
                menu_open: self.menu.is_open(r.id()),
            })
            .collect();
        ViewSnapshot {
            rows,
            header,
            page,
            visible_ids,
            total_records: records.len(),
            selected_count: self.state.selection.selected_count(),
        }
    }

    /// Replace the search text and go back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
        self.menu.close();
    }

    /// Append one typed character to the search text.
    pub fn push_query_char(&mut self, c: char) {
        let mut q = std::mem::take(&mut self.state.search_query);
        q.push(c);
        self.set_query(q);
    }

    /// Remove the last character of the search text.
    pub fn pop_query_char(&mut self) {
        let mut q = std::mem::take(&mut self.state.search_query);
        q.pop();
        self.set_query(q);
    }

    /// Set or clear the sort. Selection and page are left alone.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        tracing::debug!(sort = ?sort, noun = self.config.noun, "table sort changed");
        self.state.sort = sort;
    }

    /// Drop the sort and fall back to filtered order.
    pub fn clear_sort(&mut self) {
        self.set_sort(None);
    }

    /// What: Advance to the next "Sort by" preset.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Preset now applied; `None` when cycling past the last one cleared the sort
    pub fn cycle_sort_preset(&mut self) -> Option<&'static SortPreset> {
        let next = next_preset(self.config.sort_presets, self.state.sort.as_ref());
        self.set_sort(next.map(SortPreset::spec));
        next
    }

    /// Label of the active sort preset, if the sort came from one.
    pub fn sort_label(&self) -> Option<&'static str> {
        let spec = self.state.sort.as_ref()?;
        self.config
            .sort_presets
            .iter()
            .find(|p| p.matches(spec))
            .map(|p| p.label)
    }

    /// What: Set or clear one facet filter and go back to page 1.
    ///
    /// Inputs:
    /// - `facet`: Facet of this table
    /// - `value`: Value to keep; `None` shows every value again
    ///
    /// Output:
    /// - Updates the filter; other facets keep their values
    pub fn set_facet_filter(&mut self, facet: &'static Facet, value: Option<String>) {
        match value {
            Some(v) => {
                self.state.facet_filters.insert(facet.field, v);
            }
            None => {
                self.state.facet_filters.remove(facet.field);
            }
        }
        self.state.current_page = 1;
        self.menu.close();
    }

    /// What: Step the `index`-th facet through its values, then back to "all".
    ///
    /// Inputs:
    /// - `index`: Position in [`TableConfig::facets`]
    ///
    /// Output:
    /// - Value now active; `None` for "all" or when the table has no such facet
    pub fn cycle_facet(&mut self, index: usize) -> Option<&'static str> {
        let facet = self.config.facets.get(index)?;
        let pos = self.state.facet_value(facet.field).and_then(|cur| {
            facet
                .values
                .iter()
                .position(|v| v.eq_ignore_ascii_case(cur))
        });
        let next = match pos {
            None => facet.values.first().copied(),
            Some(i) => facet.values.get(i + 1).copied(),
        };
        self.set_facet_filter(facet, next.map(str::to_string));
        next
    }

    /// Set or clear the date range filter and go back to page 1.
    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.state.date_range = range;
        self.state.current_page = 1;
        self.menu.close();
    }

    /// What: Handle a pagination bar request.
    ///
    /// Inputs:
    /// - `nav`: Requested move
    /// - `total_items`: Size of the visible set
    ///
    /// Output:
    /// - Updates the current page (clamped); closes any open row menu
    pub fn navigate(&mut self, nav: PageNav, total_items: usize) {
        let total_pages = self.page_info(total_items).total_pages;
        self.state.current_page = pagination::navigate(self.state.current_page, total_pages, nav);
        self.menu.close();
    }

    /// What: Change the page size.
    ///
    /// Inputs:
    /// - `items_per_page`: New page size; `0` is ignored
    ///
    /// Output:
    /// - Updates the size and always resets to page 1
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            return;
        }
        self.state.items_per_page = items_per_page;
        self.state.current_page = 1;
        self.menu.close();
    }

    /// Toggle one row; returns `true` when selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.state.selection.toggle(id)
    }

    /// Header checkbox action over the current visible set.
    pub fn toggle_all<R: Record>(&mut self, records: &[R]) {
        let visible = self.visible(records);
        self.state
            .selection
            .toggle_all(visible.iter().map(|r| r.id()));
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Selected ids, ascending.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state
            .selection
            .ids()
            .map(str::to_string)
            .collect()
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    /// Prune a deleted record from the selection and the row menu.
    pub fn forget(&mut self, id: &str) {
        self.state.selection.remove(id);
        if self.menu.is_open(id) {
            self.menu.close();
        }
    }
}
