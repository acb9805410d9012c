use std::time::Instant;

use chrono::NaiveDate;

use crate::logic::DateRangePicker;
use crate::state::app_state::AppState;
use crate::state::forms::{FormKind, FormState, build_collection, build_payment};
use crate::state::modal::{DatePickerModal, Modal, ReasonsModal, RowAction};
use crate::state::records::{Collection, Tabular, Transaction};
use crate::state::types::{Focus, Page};
use crate::util::next_id;

impl AppState {
    /// What: Show a footer status message.
    ///
    /// Inputs:
    /// - `msg`: Text to show
    ///
    /// Output:
    /// - Replaces any current message and restarts the expiry timer
    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::info!(status = %msg, "status");
        self.status_message = Some(msg);
        self.status_expires_at = Some(Instant::now() + self.status_timeout);
    }

    /// Drop the status message once its time is up.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_expires_at.is_some_and(|t| now >= t) {
            self.status_message = None;
            self.status_expires_at = None;
        }
    }

    /// What: Move the calendar date forward when the wall clock crosses midnight.
    ///
    /// Inputs:
    /// - `today`: Current local date
    ///
    /// Output:
    /// - `true` when the stored date changed
    pub fn refresh_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        tracing::debug!(from = %self.today, to = %today, "date rolled over");
        self.today = today;
        true
    }

    /// What: Switch to another page.
    ///
    /// Inputs:
    /// - `page`: Target page
    ///
    /// Output:
    /// - Shows `page`; focus returns to the table and the old page's row menu closes
    pub fn switch_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.table_mut().view_mut().menu_mut().close();
        tracing::debug!(from = ?self.page, to = ?page, "page switch");
        self.page = page;
        self.focus = Focus::Table;
    }

    /// Toggle the row under the cursor; returns its new state.
    pub fn toggle_cursor_row(&mut self) -> Option<bool> {
        let id = self.table().cursor_id()?;
        Some(self.table_mut().view_mut().toggle(&id))
    }

    /// What: Open or close the action menu of the row under the cursor.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Menu toggled; the highlighted entry resets to the first action
    pub fn toggle_row_menu(&mut self) {
        let Some(id) = self.table().cursor_id() else {
            return;
        };
        self.menu_index = 0;
        self.table_mut().view_mut().menu_mut().toggle(&id);
    }

    /// Whether a row menu is open on the current page.
    pub fn row_menu_open(&self) -> bool {
        self.table().view().menu().open_id().is_some()
    }

    /// Move the highlighted row menu entry, wrapping around.
    pub fn move_menu_index(&mut self, delta: isize) {
        let n = RowAction::ALL.len();
        let step = delta.unsigned_abs() % n;
        self.menu_index = if delta < 0 {
            (self.menu_index + n - step) % n
        } else {
            (self.menu_index + step) % n
        };
    }

    /// What: Run the highlighted action of the open row menu.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Opens details or the delete confirmation, or toggles the row; the menu closes
    pub fn run_row_action(&mut self) {
        let Some(id) = self
            .table()
            .view()
            .menu()
            .open_id()
            .map(str::to_string)
        else {
            return;
        };
        self.table_mut().view_mut().menu_mut().close();
        let action = RowAction::ALL
            .get(self.menu_index)
            .copied()
            .unwrap_or(RowAction::Details);
        match action {
            RowAction::Details => {
                if let Some(lines) = self.table().details(&id) {
                    self.modal = Modal::Details { id, lines };
                }
            }
            RowAction::ToggleSelect => {
                self.table_mut().view_mut().toggle(&id);
            }
            RowAction::Delete => self.modal = Modal::ConfirmDelete { ids: vec![id] },
        }
    }

    /// Ask for confirmation before deleting every selected record.
    pub fn request_delete_selected(&mut self) {
        let ids = self.table().view().selected_ids();
        if ids.is_empty() {
            self.set_status("Nothing selected");
            return;
        }
        self.modal = Modal::ConfirmDelete { ids };
    }

    /// What: Delete records after confirmation.
    ///
    /// Inputs:
    /// - `ids`: Records to remove from the current page
    ///
    /// Output:
    /// - Records removed, selection pruned, page clamped on next render; status updated
    pub fn confirm_delete(&mut self, ids: &[String]) {
        let removed = self.table_mut().delete(ids);
        let noun = self.table().view().config().noun;
        self.set_status(format!("Deleted {removed} {noun}"));
        let total = self.table().visible_len();
        let page = self.table().view().page_info(total).current_page;
        self.table_mut().navigate(crate::logic::PageNav::Goto(page));
        self.modal = Modal::None;
    }

    /// Export every selected record of the current table, hidden ones included, as JSON.
    pub fn export_selected(&mut self) {
        let dir = self.exports_dir.clone();
        match self.table().export_selected(&dir) {
            Ok(Some(path)) => self.set_status(format!("Exported to {}", path.display())),
            Ok(None) => self.set_status("Nothing selected"),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.modal = Modal::Alert {
                    message: format!("Export failed: {e}"),
                };
            }
        }
    }

    /// What: Open the create form of the current page.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Form modal on Collections and Transactions; a status notice elsewhere
    pub fn open_create_form(&mut self) {
        let modal = match self.page {
            Page::Collections => {
                let id = next_id(
                    Collection::ID_PREFIX,
                    Collection::ID_WIDTH,
                    self.collections.ids(),
                );
                Modal::Form(FormState::new_collection(id))
            }
            Page::Transactions => {
                let id = next_id(
                    Transaction::ID_PREFIX,
                    Transaction::ID_WIDTH,
                    self.transactions.ids(),
                );
                Modal::Form(FormState::new_payment(id))
            }
            Page::Users | Page::Reviews => {
                self.set_status(format!("{} cannot be created here", self.page.title()));
                return;
            }
        };
        self.modal = modal;
    }

    /// What: Validate the open form and create its record.
    ///
    /// Inputs:
    /// - `form`: Filled form taken out of the modal
    ///
    /// Output:
    /// - On success the record is added and the modal closes; on failure the
    ///   form reopens with the error shown
    pub fn submit_form(&mut self, mut form: FormState) {
        let result = match form.kind {
            FormKind::Collection => {
                build_collection(&form, self.collections.ids(), self.today).and_then(|c| {
                    let id = c.id.clone();
                    self.collections.create(c).map(|()| id)
                })
            }
            FormKind::Payment => {
                build_payment(&form, self.transactions.ids(), self.today).and_then(|t| {
                    let id = t.id.clone();
                    self.transactions.create(t).map(|()| id)
                })
            }
        };
        match result {
            Ok(id) => {
                self.modal = Modal::None;
                self.set_status(format!("Created {id}"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "form rejected");
                form.error = Some(e.to_string());
                self.modal = Modal::Form(form);
            }
        }
    }

    /// What: Step the `index`-th "Filter by" menu of the current table.
    ///
    /// Inputs:
    /// - `index`: `0` for the first facet (status or visibility), `1` for the second
    ///
    /// Output:
    /// - Filter advanced, cursor back on the first row and a status line naming
    ///   the value; a notice when the table has no such facet
    pub fn cycle_facet(&mut self, index: usize) {
        let Some(facet) = self.table().view().config().facets.get(index) else {
            self.set_status(format!("No such filter on {}", self.page.title()));
            return;
        };
        let value = self.table_mut().view_mut().cycle_facet(index);
        self.table_mut().reset_cursor();
        self.set_status(format!("{}: {}", facet.label, value.unwrap_or("all")));
    }

    /// What: Flip review auto-approval.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Flag toggled on the Reviews page with a notice; elsewhere only the notice
    pub fn toggle_auto_approve(&mut self) {
        if self.page != Page::Reviews {
            self.set_status("Auto-approve is set on the Reviews page");
            return;
        }
        self.auto_approve = !self.auto_approve;
        tracing::info!(auto_approve = self.auto_approve, "review auto-approve toggled");
        self.set_status(if self.auto_approve {
            "Reviews will be auto-approved"
        } else {
            "Manual approval enabled"
        });
    }

    /// Open the review reasons editor (Reviews page only).
    pub fn open_review_reasons(&mut self) {
        if self.page != Page::Reviews {
            self.set_status("Review reasons are managed on the Reviews page");
            return;
        }
        self.modal = Modal::Reasons(ReasonsModal::default());
    }

    /// What: Append a moderation reason.
    ///
    /// Inputs:
    /// - `text`: Typed reason; surrounding whitespace is dropped
    ///
    /// Output:
    /// - `true` when added; blank text is ignored
    pub fn add_review_reason(&mut self, text: &str) -> bool {
        let reason = text.trim();
        if reason.is_empty() {
            return false;
        }
        tracing::debug!(reason, "review reason added");
        self.review_reasons.push(reason.to_string());
        true
    }

    /// Remove the reason at `index`; returns it when the index existed.
    pub fn delete_review_reason(&mut self, index: usize) -> Option<String> {
        (index < self.review_reasons.len()).then(|| self.review_reasons.remove(index))
    }

    /// Open the date picker, pre-filled with the applied range if any.
    pub fn open_date_picker(&mut self) {
        if self.table().view().config().date_field.is_none() {
            self.set_status("This table has no date column");
            return;
        }
        let modal = match self.table().view().state().date_range {
            Some(range) => DatePickerModal::new(DateRangePicker::with_range(range), range.from),
            None => DatePickerModal::new(DateRangePicker::new(self.today), self.today),
        };
        self.modal = Modal::DatePicker(modal);
    }

    /// What: Apply the picker's range to the current table.
    ///
    /// Inputs:
    /// - `modal`: Picker taken out of the modal slot
    ///
    /// Output:
    /// - Range applied and picker closed; when incomplete the picker stays
    ///   open with its selection and a notice
    pub fn apply_date_picker(&mut self, mut modal: DatePickerModal) {
        match modal.picker.apply() {
            Ok(range) => {
                self.table_mut().view_mut().set_date_range(Some(range));
                self.table_mut().reset_cursor();
                self.set_status(format!("Date filter: {}", range.label()));
                self.modal = Modal::None;
            }
            Err(e) => {
                modal.notice = Some(e.to_string());
                self.modal = Modal::DatePicker(modal);
            }
        }
    }

    /// Remove the date filter of the current table.
    pub fn clear_date_range(&mut self) {
        if self.table().view().state().date_range.is_some() {
            self.table_mut().view_mut().set_date_range(None);
            self.table_mut().reset_cursor();
            self.set_status("Date filter cleared");
        }
    }
}
