//! Click-to-edit state of a single cell.

use super::column::EditKind;
use super::record::{patch_record, TableRecord};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingCell {
    pub record_id: String,
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    #[error("Value must be at least {0}")]
    BelowMinimum(i64),
    #[error("\"{0}\" is not one of the allowed options")]
    UnknownOption(String),
    #[error("This column can not be edited")]
    ReadOnly,
}

/// Field change ready to be sent to the update endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub record_id: String,
    pub field: &'static str,
    pub value: Value,
}

impl FieldUpdate {
    /// `{ <field>: <value>, <id_field>: <id> }`
    pub fn body(&self, id_field: &str) -> Value {
        let mut map = Map::new();
        map.insert(self.field.to_string(), self.value.clone());
        map.insert(id_field.to_string(), json!(self.record_id));
        Value::Object(map)
    }
}

/// Converts editor text into the JSON value stored in the field.
pub fn parse_value(kind: EditKind, raw: &str) -> Result<Value, EditError> {
    match kind {
        EditKind::ReadOnly => Err(EditError::ReadOnly),
        EditKind::Text | EditKind::TextArea => Ok(Value::String(raw.to_string())),
        EditKind::Number { min } => {
            let n: i64 = raw
                .trim()
                .parse()
                .map_err(|_| EditError::NotANumber(raw.to_string()))?;
            match min {
                Some(min) if n < min => Err(EditError::BelowMinimum(min)),
                _ => Ok(json!(n)),
            }
        }
        EditKind::Select(options) => {
            if options.contains(&raw) {
                Ok(Value::String(raw.to_string()))
            } else {
                Err(EditError::UnknownOption(raw.to_string()))
            }
        }
    }
}

/// At most one cell of the table is in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineEditState {
    editing: Option<EditingCell>,
}

impl InlineEditState {
    pub fn begin(&mut self, record_id: impl Into<String>, field: &'static str, current: String) {
        self.editing = Some(EditingCell {
            record_id: record_id.into(),
            field,
            value: current,
        });
    }

    pub fn set_value(&mut self, value: String) {
        if let Some(cell) = self.editing.as_mut() {
            cell.value = value;
        }
    }

    pub fn is_editing(&self, record_id: &str, field: &str) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|c| c.record_id == record_id && c.field == field)
    }

    pub fn value(&self) -> Option<&str> {
        self.editing.as_ref().map(|c| c.value.as_str())
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Leaves edit mode. Returns `None` when nothing was being edited.
    /// An unchanged value is still committed.
    pub fn commit(&mut self, kind: EditKind) -> Option<Result<FieldUpdate, EditError>> {
        let cell = self.editing.take()?;
        Some(parse_value(kind, &cell.value).map(|value| FieldUpdate {
            record_id: cell.record_id,
            field: cell.field,
            value,
        }))
    }
}

/// Writes a confirmed update into the loaded rows. Returns false when the
/// row is no longer on the page.
pub fn apply_update<T: TableRecord>(rows: &mut [T], update: &FieldUpdate) -> bool {
    let Some(row) = rows.iter_mut().find(|r| r.record_id() == update.record_id) else {
        return false;
    };
    match patch_record(row, update.field, update.value.clone()) {
        Ok(patched) => {
            *row = patched;
            true
        }
        Err(e) => {
            log::warn!("could not apply {} to row {}: {}", update.field, update.record_id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    const STATUSES: &[&str] = &["Disponivel", "Indisponivel"];

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        order: i64,
        status: String,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> String {
            self.id.clone()
        }
    }

    #[test]
    fn commit_builds_update_body() {
        let mut state = InlineEditState::default();
        state.begin("c1", "order", "3".into());
        assert!(state.is_editing("c1", "order"));
        state.set_value("7".into());
        let update = state.commit(EditKind::Number { min: Some(1) }).unwrap().unwrap();
        assert_eq!(update.body("category_id"), json!({ "order": 7, "category_id": "c1" }));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn unchanged_value_is_still_committed() {
        let mut state = InlineEditState::default();
        state.begin("c1", "status", "Disponivel".into());
        let update = state.commit(EditKind::Select(STATUSES)).unwrap().unwrap();
        assert_eq!(update.value, json!("Disponivel"));
    }

    #[test]
    fn invalid_number_is_rejected_and_edit_ends() {
        let mut state = InlineEditState::default();
        state.begin("c1", "order", "0".into());
        let result = state.commit(EditKind::Number { min: Some(1) }).unwrap();
        assert_eq!(result, Err(EditError::BelowMinimum(1)));
        assert!(!state.is_editing("c1", "order"));
        assert_eq!(parse_value(EditKind::Number { min: None }, "abc"), Err(EditError::NotANumber("abc".into())));
        assert_eq!(parse_value(EditKind::Select(STATUSES), "Gone"), Err(EditError::UnknownOption("Gone".into())));
    }

    #[test]
    fn commit_without_edit_is_noop() {
        let mut state = InlineEditState::default();
        assert!(state.commit(EditKind::Text).is_none());
        state.begin("a", "status", "x".into());
        state.cancel();
        assert!(state.commit(EditKind::Text).is_none());
    }

    #[test]
    fn confirmed_update_patches_matching_row() {
        let mut rows = vec![
            Row { id: "a".into(), order: 1, status: "Disponivel".into() },
            Row { id: "b".into(), order: 2, status: "Disponivel".into() },
        ];
        let update = FieldUpdate { record_id: "b".into(), field: "status", value: json!("Indisponivel") };
        assert!(apply_update(&mut rows, &update));
        assert_eq!(rows[1].status, "Indisponivel");
        assert_eq!(rows[0].status, "Disponivel");
        let missing = FieldUpdate { record_id: "z".into(), field: "order", value: json!(5) };
        assert!(!apply_update(&mut rows, &missing));
    }
}
