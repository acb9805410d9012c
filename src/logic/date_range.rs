//! Two-click date range selection and the month grid behind it.
//!
//! The first click picks `from`; the second picks `to`, swapping the two when
//! the second date is not after the first. A click on a complete range starts
//! a new one.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{DashError, Result};

/// Number of cells in the month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Finalized inclusive date range; `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range.
    pub from: NaiveDate,
    /// Last day of the range.
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the ends if they arrive out of order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// Whether `d` lies inside the range (both ends included).
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.from <= d && d <= self.to
    }

    /// Display form, e.g. `2025-03-05 → 2025-03-10`.
    pub fn label(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }
}

/// Picker state derived from which ends are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    /// Nothing chosen.
    Idle,
    /// Only `from` is set.
    FromChosen,
    /// Both ends are set.
    RangeChosen,
}

/// In-progress selection held by the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    /// Start date, once clicked.
    pub from: Option<NaiveDate>,
    /// End date, once clicked.
    pub to: Option<NaiveDate>,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Calendar date of the cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (only these are clickable).
    pub in_current_month: bool,
    /// Wall-clock today marker; purely visual.
    pub is_today: bool,
    /// Whether the date is `from` or `to`.
    pub is_endpoint: bool,
    /// Whether the date lies inside the chosen range.
    pub in_range: bool,
}

/// Date range picker state machine with its displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    /// Current selection.
    selection: DateRangeSelection,
    /// Displayed year.
    year: i32,
    /// Displayed month, 1-12.
    month: u32,
}

impl DateRangePicker {
    /// What: Create an idle picker showing the month of `today`.
    ///
    /// Inputs:
    /// - `today`: Date whose month is displayed first
    ///
    /// Output:
    /// - Picker in `Idle`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selection: DateRangeSelection::default(),
            year: today.year(),
            month: today.month(),
        }
    }

    /// What: Create a picker pre-filled with an applied range.
    ///
    /// Inputs:
    /// - `range`: Range applied earlier
    ///
    /// Output:
    /// - Picker in `RangeChosen` showing the month of `range.from`
    pub fn with_range(range: DateRange) -> Self {
        Self {
            selection: DateRangeSelection {
                from: Some(range.from),
                to: Some(range.to),
            },
            year: range.from.year(),
            month: range.from.month(),
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> PickerPhase {
        match (self.selection.from, self.selection.to) {
            (Some(_), Some(_)) => PickerPhase::RangeChosen,
            (Some(_), None) => PickerPhase::FromChosen,
            _ => PickerPhase::Idle,
        }
    }

    /// Current selection.
    pub const fn selection(&self) -> DateRangeSelection {
        self.selection
    }

    /// Displayed `(year, month)`.
    pub const fn displayed(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// What: Handle a click on date `d`.
    ///
    /// Inputs:
    /// - `d`: Clicked date
    ///
    /// Output:
    /// - Updates the selection; `from <= to` holds whenever both are set
    ///
    /// Details:
    /// - `Idle`/`RangeChosen`: start over with `from = d`.
    /// - `FromChosen` with `from = f`: `d > f` sets `to = d`; otherwise `from = d, to = f`.
    pub fn select(&mut self, d: NaiveDate) {
        match (self.selection.from, self.selection.to) {
            (Some(f), None) => {
                if d > f {
                    self.selection.to = Some(d);
                } else {
                    self.selection.from = Some(d);
                    self.selection.to = Some(f);
                }
            }
            _ => {
                self.selection = DateRangeSelection {
                    from: Some(d),
                    to: None,
                };
            }
        }
        tracing::debug!(phase = ?self.phase(), date = %d, "date picker click");
    }

    /// What: Handle a click on a grid cell.
    ///
    /// Inputs:
    /// - `cell`: Cell from [`DateRangePicker::grid`]
    ///
    /// Output:
    /// - `true` when the click was accepted; other-month cells are ignored
    pub fn click(&mut self, cell: &DayCell) -> bool {
        if !cell.in_current_month {
            return false;
        }
        self.select(cell.date);
        true
    }

    /// Forget both dates.
    pub fn clear(&mut self) {
        self.selection = DateRangeSelection::default();
    }

    /// What: Finalize the selection.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `Ok(DateRange)` when both dates are set; the caller closes the picker
    /// - `Err(DashError::IncompleteRange)` otherwise; the selection is kept
    pub fn apply(&self) -> Result<DateRange> {
        match (self.selection.from, self.selection.to) {
            (Some(from), Some(to)) => Ok(DateRange::new(from, to)),
            _ => {
                tracing::info!(phase = ?self.phase(), "date range apply rejected: incomplete");
                Err(DashError::IncompleteRange)
            }
        }
    }

    /// What: Move the displayed month.
    ///
    /// Inputs:
    /// - `delta`: Months to move; `-1` and `+1` are what the arrows send
    ///
    /// Output:
    /// - Updates the displayed year/month, wrapping across years
    pub fn navigate(&mut self, delta: i32) {
        let idx = self.year * 12 + i32::try_from(self.month).unwrap_or(1) - 1 + delta;
        self.year = idx.div_euclid(12);
        self.month = u32::try_from(idx.rem_euclid(12)).unwrap_or(0) + 1;
    }

    /// Jump the display to the month containing `d`.
    pub fn show_month_of(&mut self, d: NaiveDate) {
        self.year = d.year();
        self.month = d.month();
    }

    /// Whether `d` is an end or inside the current selection.
    fn mark(&self, d: NaiveDate) -> (bool, bool) {
        let endpoint = self.selection.from == Some(d) || self.selection.to == Some(d);
        let inside = match (self.selection.from, self.selection.to) {
            (Some(f), Some(t)) => f <= d && d <= t,
            _ => false,
        };
        (endpoint, inside)
    }

    /// What: Describe the cell of `date` as the displayed month sees it.
    ///
    /// Inputs:
    /// - `date`: Any date, inside or outside the displayed month
    ///
    /// Output:
    /// - Cell with month membership and selection flags; `is_today` is always
    ///   `false` since no wall clock is consulted
    pub fn cell_for(&self, date: NaiveDate) -> DayCell {
        let (is_endpoint, in_range) = self.mark(date);
        DayCell {
            date,
            in_current_month: date.year() == self.year && date.month() == self.month,
            is_today: false,
            is_endpoint,
            in_range,
        }
    }

    /// What: Build the 42-cell grid for the displayed month.
    ///
    /// Inputs:
    /// - `today`: Wall-clock date for the today marker
    ///
    /// Output:
    /// - Cells with selection flags; empty only for dates chrono cannot represent
    pub fn grid(&self, today: NaiveDate) -> Vec<DayCell> {
        calendar_grid(self.year, self.month, today)
            .into_iter()
            .map(|mut c| {
                let (endpoint, inside) = self.mark(c.date);
                c.is_endpoint = endpoint;
                c.in_range = inside;
                c
            })
            .collect()
    }
}

/// What: Build the 6x7 month grid starting on the Sunday on/before the 1st.
///
/// Inputs:
/// - `year`, `month`: Month to display (month 1-12)
/// - `today`: Wall-clock date for the today marker
///
/// Output:
/// - 42 cells, or an empty vector for an invalid month
pub fn calendar_grid(year: i32, month: u32, today: NaiveDate) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let Some(start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };
    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DayCell {
            date,
            in_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            is_endpoint: false,
            in_range: false,
        })
        .collect()
}

/// What: Shift `d` by whole months, clamping the day to the target month.
///
/// Inputs:
/// - `d`: Start date
/// - `delta`: Months to move (negative goes back)
///
/// Output:
/// - Shifted date, or `d` itself when out of chrono's range
pub fn shift_months(d: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    };
    shifted.unwrap_or(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    /// What: Second click earlier than the first swaps the ends
    ///
    /// - Input: Click Mar 10, then Mar 5
    /// - Output: from = Mar 5, to = Mar 10, RangeChosen
    fn second_click_earlier_swaps() {
        let mut p = DateRangePicker::new(day(2025, 3, 1));
        p.select(day(2025, 3, 10));
        assert_eq!(p.phase(), PickerPhase::FromChosen);
        p.select(day(2025, 3, 5));
        assert_eq!(p.phase(), PickerPhase::RangeChosen);
        let s = p.selection();
        assert_eq!(s.from, Some(day(2025, 3, 5)));
        assert_eq!(s.to, Some(day(2025, 3, 10)));
    }

    #[test]
    /// What: Same-day second click and restart after a full range
    ///
    /// - Input: Click Mar 7 twice; then click Mar 20
    /// - Output: One-day range; third click starts a new selection
    fn same_day_and_restart() {
        let mut p = DateRangePicker::new(day(2025, 3, 1));
        p.select(day(2025, 3, 7));
        p.select(day(2025, 3, 7));
        assert_eq!(
            p.apply().ok(),
            Some(DateRange::new(day(2025, 3, 7), day(2025, 3, 7)))
        );
        p.select(day(2025, 3, 20));
        assert_eq!(p.phase(), PickerPhase::FromChosen);
        assert_eq!(p.selection().to, None);
    }

    #[test]
    /// What: Apply requires both ends and keeps the selection on failure
    ///
    /// - Input: Apply when idle, apply with only `from`, clear
    /// - Output: IncompleteRange twice, `from` retained, Idle after clear
    fn apply_validation() {
        let mut p = DateRangePicker::new(day(2025, 3, 1));
        assert!(matches!(p.apply(), Err(DashError::IncompleteRange)));
        p.select(day(2025, 3, 2));
        assert!(matches!(p.apply(), Err(DashError::IncompleteRange)));
        assert_eq!(p.selection().from, Some(day(2025, 3, 2)));
        p.clear();
        assert_eq!(p.phase(), PickerPhase::Idle);
    }

    #[test]
    /// What: Grid layout for a month starting mid-week
    ///
    /// - Input: March 2025 (1st is a Saturday)
    /// - Output: 42 cells from Sun Feb 23; leading/trailing cells flagged other-month
    fn grid_layout() {
        let today = day(2025, 3, 14);
        let cells = calendar_grid(2025, 3, today);
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date, day(2025, 2, 23));
        assert!(!cells[0].in_current_month);
        assert_eq!(cells[6].date, day(2025, 3, 1));
        assert!(cells[6].in_current_month);
        assert_eq!(cells[41].date, day(2025, 4, 5));
        assert_eq!(cells.iter().filter(|c| c.in_current_month).count(), 31);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert!(calendar_grid(2025, 13, today).is_empty());
    }

    #[test]
    /// What: Other-month cells are not clickable
    ///
    /// - Input: Click the leading February cell of the March grid
    /// - Output: Click rejected, picker stays Idle
    fn other_month_click_ignored() {
        let mut p = DateRangePicker::new(day(2025, 3, 14));
        let grid = p.grid(day(2025, 3, 14));
        assert!(!p.click(&grid[0]));
        assert_eq!(p.phase(), PickerPhase::Idle);
        assert!(p.click(&grid[10]));
        assert_eq!(p.phase(), PickerPhase::FromChosen);
    }

    #[test]
    /// What: Cell lookup without a wall clock
    ///
    /// - Input: March displayed with `from = Mar 3`; look up Mar 3 and Feb 28
    /// - Output: Mar 3 is an in-month endpoint, clickable; Feb 28 is rejected
    fn cell_for_matches_grid_flags() {
        let mut p = DateRangePicker::new(day(2025, 3, 14));
        p.select(day(2025, 3, 3));
        let mar3 = p.cell_for(day(2025, 3, 3));
        assert!(mar3.in_current_month && mar3.is_endpoint && !mar3.is_today);
        let from_grid = p
            .grid(day(2025, 3, 3))
            .into_iter()
            .find(|c| c.date == day(2025, 3, 3))
            .expect("cell in grid");
        assert_eq!((from_grid.in_current_month, from_grid.is_endpoint), (true, true));
        let outside = p.cell_for(day(2025, 2, 28));
        assert!(!outside.in_current_month);
        assert!(!p.click(&outside));
        let mar9 = p.cell_for(day(2025, 3, 9));
        assert!(p.click(&mar9));
        assert_eq!(p.phase(), PickerPhase::RangeChosen);
    }

    #[test]
    /// What: Month navigation wraps across years
    ///
    /// - Input: Back from January, forward from December, twelve steps
    /// - Output: December of previous year, January of next year, same month next year
    fn navigate_wraps_years() {
        let mut p = DateRangePicker::new(day(2025, 1, 15));
        p.navigate(-1);
        assert_eq!(p.displayed(), (2024, 12));
        p.navigate(1);
        p.navigate(11);
        assert_eq!(p.displayed(), (2025, 12));
        p.navigate(1);
        assert_eq!(p.displayed(), (2026, 1));
        p.navigate(12);
        assert_eq!(p.displayed(), (2027, 1));
    }

    #[test]
    /// What: Grid marks range endpoints and interior
    ///
    /// - Input: Range Mar 3 - Mar 5
    /// - Output: 2 endpoints, 3 cells in range
    fn grid_marks_range() {
        let p = DateRangePicker::with_range(DateRange::new(day(2025, 3, 5), day(2025, 3, 3)));
        let grid = p.grid(day(2025, 1, 1));
        assert_eq!(grid.iter().filter(|c| c.is_endpoint).count(), 2);
        assert_eq!(grid.iter().filter(|c| c.in_range).count(), 3);
    }

    #[test]
    /// What: Month shifting clamps the day
    ///
    /// - Input: Jan 31 plus one month; Mar 31 minus one month
    /// - Output: Feb 28 and Feb 28 in 2025
    fn shift_months_clamps() {
        assert_eq!(shift_months(day(2025, 1, 31), 1), day(2025, 2, 28));
        assert_eq!(shift_months(day(2025, 3, 31), -1), day(2025, 2, 28));
    }
}
