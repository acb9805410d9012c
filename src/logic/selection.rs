//! Row selection that survives filtering, sorting and paging.
//!
//! The set may hold ids that are currently hidden by a filter. That is what
//! keeps a selection intact while the user narrows and widens the search.

use std::collections::BTreeSet;

/// Display state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    /// No visible row is selected (or nothing is visible).
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    /// Every visible row is selected.
    Checked,
}

impl HeaderCheck {
    /// Checkbox glyph used by the table header.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Unchecked => "[ ]",
            Self::Indeterminate => "[-]",
            Self::Checked => "[x]",
        }
    }
}

/// Set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    /// Selected ids, kept sorted for deterministic bulk actions.
    ids: BTreeSet<String>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Flip the selection state of one id.
    ///
    /// Inputs:
    /// - `id`: Record id
    ///
    /// Output:
    /// - `true` when the id is selected afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// What: Header checkbox action over the visible rows.
    ///
    /// Inputs:
    /// - `visible`: Ids of the records left after filtering
    ///
    /// Output:
    /// - When every visible id is selected, removes exactly those ids;
    ///   otherwise adds all of them. Hidden selections are never touched.
    pub fn toggle_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: Vec<&str> = visible.into_iter().collect();
        if self.all_selected(visible.iter().copied()) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.into_iter().map(str::to_string));
        }
    }

    /// Whether `visible` is non-empty and fully selected.
    pub fn all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// What: Compute the header checkbox state.
    ///
    /// Inputs:
    /// - `visible`: Ids of the records left after filtering
    ///
    /// Output:
    /// - `Checked` when all are selected, `Indeterminate` when some are, else `Unchecked`
    pub fn header_state<'a, I>(&self, visible: I) -> HeaderCheck
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut total, mut hit) = (0_usize, 0_usize);
        for id in visible {
            total += 1;
            if self.ids.contains(id) {
                hit += 1;
            }
        }
        if total > 0 && hit == total {
            HeaderCheck::Checked
        } else if hit > 0 {
            HeaderCheck::Indeterminate
        } else {
            HeaderCheck::Unchecked
        }
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids, visible or not.
    pub fn selected_count(&self) -> usize {
        self.ids.len()
    }

    /// Drop `id` from the selection (used when its record is deleted).
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggle is XOR
    ///
    /// - Input: Toggle the same id twice
    /// - Output: Selected, then not selected
    fn toggle_is_xor() {
        let mut s = SelectionSet::new();
        assert!(s.toggle("A"));
        assert!(s.is_selected("A"));
        assert!(!s.toggle("A"));
        assert!(!s.is_selected("A"));
        assert_eq!(s.selected_count(), 0);
    }

    #[test]
    /// What: Toggle-all only touches the visible ids
    ///
    /// - Input: Hidden "Z" selected; toggle_all over [A,B,C] twice
    /// - Output: {A,B,C,Z} then {Z}
    fn toggle_all_scoped_to_visible() {
        let mut s = SelectionSet::new();
        s.toggle("Z");
        let visible = ["A", "B", "C"];
        s.toggle_all(visible);
        assert_eq!(s.ids().collect::<Vec<_>>(), vec!["A", "B", "C", "Z"]);
        assert_eq!(s.header_state(visible), HeaderCheck::Checked);
        s.toggle_all(visible);
        assert_eq!(s.ids().collect::<Vec<_>>(), vec!["Z"]);
    }

    #[test]
    /// What: Partial selection is completed, not cleared
    ///
    /// - Input: B selected; toggle_all over [A,B]
    /// - Output: Both selected; header went Indeterminate -> Checked
    fn partial_selection_completes() {
        let mut s = SelectionSet::new();
        s.toggle("B");
        assert_eq!(s.header_state(["A", "B"]), HeaderCheck::Indeterminate);
        s.toggle_all(["A", "B"]);
        assert!(s.is_selected("A") && s.is_selected("B"));
    }

    #[test]
    /// What: Empty visible set
    ///
    /// - Input: Selection with "A"; empty visible list
    /// - Output: Not all-selected, header unchecked, toggle_all is a no-op
    fn empty_visible_set() {
        let mut s = SelectionSet::new();
        s.toggle("A");
        let none: [&str; 0] = [];
        assert!(!s.all_selected(none));
        assert_eq!(s.header_state(none), HeaderCheck::Unchecked);
        s.toggle_all(none);
        assert_eq!(s.selected_count(), 1);
    }
}
