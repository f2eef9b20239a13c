//! Generic access to the fields of a table row.
//!
//! Rows are plain serde DTOs; the table reads and patches them through their
//! JSON form so one renderer serves every resource.

use crate::shared::date_utils::{format_datetime, is_iso_datetime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub trait TableRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn record_id(&self) -> String;
}

/// Value of `key` on the record, `Null` when absent.
pub fn field_value<T: Serialize>(record: &T, key: &str) -> Value {
    serde_json::to_value(record)
        .ok()
        .and_then(|v| v.get(key).cloned())
        .unwrap_or(Value::Null)
}

/// Raw text used to seed an inline editor.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Display text of a cell without a custom renderer.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if is_iso_datetime(s) => format_datetime(s),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        Value::Object(map) => ["name", "title", "id"]
            .iter()
            .find_map(|k| map.get(*k))
            .map(cell_text)
            .unwrap_or_else(|| value.to_string()),
    }
}

/// Returns a copy of the record with one field replaced.
pub fn patch_record<T: TableRecord>(record: &T, key: &str, value: Value) -> Result<T, serde_json::Error> {
    let mut json = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut json {
        map.insert(key.to_string(), value);
    }
    serde_json::from_value(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        title: String,
        clicks: i64,
        created_at: String,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> String {
            self.id.clone()
        }
    }

    fn row() -> Row {
        Row {
            id: "p1".into(),
            title: "Banner".into(),
            clicks: 12,
            created_at: "2024-03-15T14:02:26.123Z".into(),
        }
    }

    #[test]
    fn reads_fields_by_key() {
        let r = row();
        assert_eq!(field_value(&r, "title"), Value::String("Banner".into()));
        assert_eq!(field_value(&r, "missing"), Value::Null);
    }

    #[test]
    fn formats_cells_by_type() {
        let r = row();
        assert_eq!(cell_text(&field_value(&r, "clicks")), "12");
        assert_eq!(cell_text(&field_value(&r, "created_at")), "15/03/2024 14:02");
        assert_eq!(cell_text(&Value::Bool(true)), "Yes");
        assert_eq!(cell_text(&serde_json::json!([{ "name": "rust" }, { "name": "wasm" }])), "rust, wasm");
        assert_eq!(raw_text(&field_value(&r, "clicks")), "12");
    }

    #[test]
    fn patch_replaces_single_field() {
        let patched = patch_record(&row(), "clicks", serde_json::json!(40)).unwrap();
        assert_eq!(patched.clicks, 40);
        assert_eq!(patched.title, "Banner");
    }

    #[test]
    fn patch_with_wrong_type_fails() {
        assert!(patch_record(&row(), "clicks", serde_json::json!("many")).is_err());
    }
}
