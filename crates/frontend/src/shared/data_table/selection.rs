use std::collections::BTreeSet;

/// Header checkbox state derived from the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Ids of the rows checked for a bulk action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn toggle(&mut self, id: &str) {
        let checked = !self.contains(id);
        self.set(id, checked);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Checked when the selection size equals the number of visible rows.
    pub fn all_selected(&self, visible: &[String]) -> bool {
        !visible.is_empty() && self.ids.len() == visible.len()
    }

    /// "Select all" checkbox: selects every visible row, or clears when all
    /// are already selected.
    pub fn toggle_all(&mut self, visible: &[String]) {
        if self.all_selected(visible) {
            self.clear();
        } else {
            self.ids = visible.iter().cloned().collect();
        }
    }

    pub fn check_state(&self, visible: &[String]) -> CheckState {
        let selected = visible.iter().filter(|id| self.contains(id)).count();
        if selected == 0 {
            CheckState::Unchecked
        } else if selected == visible.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("r{}", i)).collect()
    }

    #[test]
    fn select_all_then_toggle_clears() {
        let rows = visible(4);
        let mut sel = SelectionSet::default();
        sel.toggle_all(&rows);
        assert_eq!(sel.ids(), rows);
        assert!(sel.all_selected(&rows));
        sel.toggle_all(&rows);
        assert!(sel.is_empty());
    }

    #[test]
    fn partial_selection_is_completed_by_select_all() {
        let rows = visible(3);
        let mut sel = SelectionSet::default();
        sel.toggle("r2");
        assert_eq!(sel.check_state(&rows), CheckState::Indeterminate);
        sel.toggle_all(&rows);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.check_state(&rows), CheckState::Checked);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = SelectionSet::default();
        sel.toggle("a");
        assert!(sel.contains("a"));
        sel.toggle("a");
        assert!(!sel.contains("a"));
        sel.set("b", true);
        sel.set("b", true);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        let mut sel = SelectionSet::default();
        assert!(!sel.all_selected(&[]));
        sel.toggle_all(&[]);
        assert!(sel.is_empty());
        assert_eq!(sel.check_state(&[]), CheckState::Unchecked);
    }
}
