//! Modal dialog state for the UI.

use chrono::{Days, NaiveDate};

use crate::logic::DateRangePicker;
use crate::state::forms::FormState;

/// Actions offered by a row's action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Show every field of the record.
    Details,
    /// Tick or untick the row.
    ToggleSelect,
    /// Delete the record after confirmation.
    Delete,
}

impl RowAction {
    /// All actions in menu order.
    pub const ALL: [Self; 3] = [Self::Details, Self::ToggleSelect, Self::Delete];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Details => "View details",
            Self::ToggleSelect => "Select / unselect",
            Self::Delete => "Delete",
        }
    }
}

/// What: Date picker dialog state.
///
/// Details:
/// - `picker` holds the range selection; `cursor` is the highlighted day the
///   keyboard moves around the grid. Moving the cursor out of the displayed
///   month flips the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerModal {
    /// Selection state machine.
    pub picker: DateRangePicker,
    /// Highlighted day.
    pub cursor: NaiveDate,
    /// Validation notice shown under the grid.
    pub notice: Option<String>,
}

impl DatePickerModal {
    /// Open on `cursor`'s month with the given picker state.
    pub fn new(picker: DateRangePicker, cursor: NaiveDate) -> Self {
        let mut out = Self {
            picker,
            cursor,
            notice: None,
        };
        out.picker.show_month_of(cursor);
        out
    }

    /// What: Move the highlighted day.
    ///
    /// Inputs:
    /// - `days`: Signed offset
    ///
    /// Output:
    /// - Updates the cursor and keeps its month on screen
    pub fn move_cursor(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let next = if days < 0 {
            self.cursor.checked_sub_days(step)
        } else {
            self.cursor.checked_add_days(step)
        };
        if let Some(d) = next {
            self.cursor = d;
            self.picker.show_month_of(d);
        }
    }

    /// Flip the displayed month and carry the cursor along.
    pub fn shift_month(&mut self, delta: i32) {
        self.picker.navigate(delta);
        self.cursor = crate::logic::date_range::shift_months(self.cursor, delta);
        self.picker.show_month_of(self.cursor);
    }

    /// Select the highlighted day through its cell; days outside the shown month are ignored.
    pub fn pick(&mut self) {
        let cell = self.picker.cell_for(self.cursor);
        if self.picker.click(&cell) {
            self.notice = None;
        }
    }
}

/// What: Review reasons editor state.
///
/// Details:
/// - The reasons themselves live on `AppState`; the dialog only tracks the
///   highlighted entry and the text typed into the "Add new reason" box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonsModal {
    /// Highlighted reason.
    pub cursor: usize,
    /// Reason being typed.
    pub input: String,
}

impl ReasonsModal {
    /// Move the highlight by `delta` within a list of `len` reasons.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        let next = self.cursor.saturating_add_signed(delta);
        self.cursor = next.min(len.saturating_sub(1));
    }

    /// Keep the highlight on an existing entry after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Active modal dialog, at most one at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    /// No dialog open.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert { message: String },
    /// Key bindings overview.
    Help,
    /// Date range picker for the current table.
    DatePicker(DatePickerModal),
    /// Create form (New collection, New payment).
    Form(FormState),
    /// "Manage Review Reasons" editor.
    Reasons(ReasonsModal),
    /// Confirmation before deleting `ids`.
    ConfirmDelete { ids: Vec<String> },
    /// Field listing of one record.
    Details {
        /// Record id shown in the title.
        id: String,
        /// `(header, value)` pairs.
        lines: Vec<(String, String)>,
    },
}

impl Modal {
    /// Whether no dialog is open.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
