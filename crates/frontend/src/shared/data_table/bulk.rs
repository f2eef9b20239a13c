//! Bulk delete and export workflow around the row selection.

use super::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkModal {
    #[default]
    Closed,
    ConfirmDelete,
    Export,
}

/// Outcome of pressing the bulk delete button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Nothing checked; the user gets a warning and no modal opens.
    NothingSelected,
    /// Another bulk request is still running.
    Blocked,
    AwaitingConfirmation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkActionState {
    modal: BulkModal,
    in_flight: bool,
}

impl BulkActionState {
    pub fn modal(&self) -> BulkModal {
        self.modal
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn request_delete(&mut self, selection: &SelectionSet) -> DeleteDecision {
        if self.in_flight {
            return DeleteDecision::Blocked;
        }
        if selection.is_empty() {
            return DeleteDecision::NothingSelected;
        }
        self.modal = BulkModal::ConfirmDelete;
        DeleteDecision::AwaitingConfirmation
    }

    pub fn open_export(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.modal = BulkModal::Export;
        true
    }

    /// Dismisses the modal unless a request is running.
    pub fn close(&mut self) {
        if !self.in_flight {
            self.modal = BulkModal::Closed;
        }
    }

    /// Marks the delete as running and returns the ids to send.
    pub fn confirm_delete(&mut self, selection: &SelectionSet) -> Option<Vec<String>> {
        if self.modal != BulkModal::ConfirmDelete || self.in_flight || selection.is_empty() {
            return None;
        }
        self.in_flight = true;
        Some(selection.ids())
    }

    /// On success the selection is cleared and the modal closes; on failure
    /// both are kept so the user can retry.
    pub fn finish_delete(&mut self, succeeded: bool, selection: &mut SelectionSet) {
        self.in_flight = false;
        if succeeded {
            selection.clear();
            self.modal = BulkModal::Closed;
        }
    }

    pub fn begin_export(&mut self) -> bool {
        if self.modal != BulkModal::Export || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish_export(&mut self, succeeded: bool) {
        self.in_flight = false;
        if succeeded {
            self.modal = BulkModal::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(ids: &[&str]) -> SelectionSet {
        let mut sel = SelectionSet::default();
        for id in ids {
            sel.set(id, true);
        }
        sel
    }

    #[test]
    fn empty_selection_only_warns() {
        let mut state = BulkActionState::default();
        assert_eq!(state.request_delete(&SelectionSet::default()), DeleteDecision::NothingSelected);
        assert_eq!(state.modal(), BulkModal::Closed);
    }

    #[test]
    fn confirmed_delete_sends_ids_once() {
        let mut state = BulkActionState::default();
        let mut sel = selected(&["b", "a"]);
        assert_eq!(state.request_delete(&sel), DeleteDecision::AwaitingConfirmation);
        assert_eq!(state.confirm_delete(&sel), Some(vec!["a".to_string(), "b".to_string()]));
        assert!(state.in_flight());
        assert_eq!(state.confirm_delete(&sel), None);
        assert_eq!(state.request_delete(&sel), DeleteDecision::Blocked);
        state.close();
        assert_eq!(state.modal(), BulkModal::ConfirmDelete);
        state.finish_delete(true, &mut sel);
        assert!(sel.is_empty());
        assert_eq!(state.modal(), BulkModal::Closed);
    }

    #[test]
    fn failed_delete_keeps_selection_for_retry() {
        let mut state = BulkActionState::default();
        let mut sel = selected(&["a"]);
        state.request_delete(&sel);
        state.confirm_delete(&sel);
        state.finish_delete(false, &mut sel);
        assert_eq!(sel.len(), 1);
        assert_eq!(state.modal(), BulkModal::ConfirmDelete);
        assert!(state.confirm_delete(&sel).is_some());
    }

    #[test]
    fn cancel_closes_without_request() {
        let mut state = BulkActionState::default();
        let sel = selected(&["a"]);
        state.request_delete(&sel);
        state.close();
        assert_eq!(state.confirm_delete(&sel), None);
    }

    #[test]
    fn export_runs_only_from_its_modal() {
        let mut state = BulkActionState::default();
        assert!(!state.begin_export());
        assert!(state.open_export());
        assert!(state.begin_export());
        assert!(!state.open_export());
        state.finish_export(false);
        assert_eq!(state.modal(), BulkModal::Export);
        assert!(state.begin_export());
        state.finish_export(true);
        assert_eq!(state.modal(), BulkModal::Closed);
    }
}
