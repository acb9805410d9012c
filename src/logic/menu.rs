/// Tracks the single open row action menu of a table.
///
/// Opening a row's menu closes whichever menu was open before, so at most
/// one menu is ever shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveMenu {
    /// Id of the row whose menu is open.
    open: Option<String>,
}

impl ActiveMenu {
    /// Open the menu for `id`, closing any other.
    pub fn open(&mut self, id: &str) {
        self.open = Some(id.to_string());
    }

    /// Toggle the menu for `id`; returns `true` when it is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_open(id) {
            self.open = None;
            false
        } else {
            self.open(id);
            true
        }
    }

    /// Close the open menu (click outside, navigation, Esc).
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Whether the menu for `id` is the open one.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// Id of the row whose menu is open.
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::ActiveMenu;

    #[test]
    /// What: Only one menu open at a time
    ///
    /// - Input: Open A, open B, toggle B, toggle A
    /// - Output: B replaces A; toggling B closes it; toggling A opens A
    fn single_open_menu() {
        let mut m = ActiveMenu::default();
        m.open("A");
        m.open("B");
        assert!(!m.is_open("A"));
        assert!(m.is_open("B"));
        assert!(!m.toggle("B"));
        assert_eq!(m.open_id(), None);
        assert!(m.toggle("A"));
        m.close();
        assert_eq!(m.open_id(), None);
    }
}
