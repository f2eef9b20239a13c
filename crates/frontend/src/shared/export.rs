//! Export dialog state and browser download of the exported file.

use contracts::shared::export::{ExportFormat, ExportRequest};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportColumn {
    pub key: String,
    pub display_name: String,
    pub selected: bool,
}

/// Columns offered in the export dialog. Nothing is selected until the user
/// picks columns or presses "Select all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSelection {
    columns: Vec<ExportColumn>,
}

impl ExportSelection {
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(key, label)| ExportColumn {
                    key: key.to_string(),
                    display_name: label.to_string(),
                    selected: false,
                })
                .collect(),
        }
    }

    pub fn columns(&self) -> &[ExportColumn] {
        &self.columns
    }

    pub fn toggle(&mut self, key: &str) {
        if let Some(c) = self.columns.iter_mut().find(|c| c.key == key) {
            c.selected = !c.selected;
        }
    }

    /// Header used in the exported file. Blank names fall back to the key.
    pub fn rename(&mut self, key: &str, display_name: String) {
        if let Some(c) = self.columns.iter_mut().find(|c| c.key == key) {
            c.display_name = display_name;
        }
    }

    pub fn select_all(&mut self, selected: bool) {
        for c in &mut self.columns {
            c.selected = selected;
        }
    }

    pub fn has_selection(&self) -> bool {
        self.columns.iter().any(|c| c.selected)
    }

    /// `None` when no column is selected.
    pub fn build_request(
        &self,
        table_name: &str,
        format: ExportFormat,
        user_id: Option<String>,
    ) -> Option<ExportRequest> {
        if !self.has_selection() {
            return None;
        }
        let selected = self.columns.iter().filter(|c| c.selected);
        let columns = selected.clone().map(|c| c.key.clone()).collect();
        let custom_column_names: BTreeMap<String, String> = selected
            .map(|c| {
                let name = c.display_name.trim();
                let name = if name.is_empty() { c.key.as_str() } else { name };
                (c.key.clone(), name.to_string())
            })
            .collect();
        Some(ExportRequest {
            user_id,
            table_name: table_name.to_string(),
            columns,
            format,
            custom_column_names,
        })
    }
}

pub fn export_file_name(title: &str, format: ExportFormat) -> String {
    format!("{}.{}", title, format.extension())
}

/// Hands the bytes to the browser as a file download.
pub fn download_bytes(bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> ExportSelection {
        ExportSelection::from_columns([("id", "ID"), ("name_category", "Name"), ("status", "Status")])
    }

    #[test]
    fn starts_with_nothing_selected() {
        let sel = selection();
        assert!(!sel.has_selection());
        assert!(sel.build_request("category", ExportFormat::Xlsx, None).is_none());
    }

    #[test]
    fn select_all_exports_every_column() {
        let mut sel = selection();
        sel.select_all(true);
        let request = sel.build_request("category", ExportFormat::Xlsx, None).unwrap();
        assert_eq!(request.columns, vec!["id", "name_category", "status"]);
        assert_eq!(request.custom_column_names["name_category"], "Name");
    }

    #[test]
    fn only_selected_columns_are_exported() {
        let mut sel = selection();
        sel.toggle("name_category");
        sel.toggle("status");
        sel.rename("status", "  ".into());
        let request = sel
            .build_request("category", ExportFormat::Csv, Some("u1".into()))
            .unwrap();
        assert_eq!(request.columns, vec!["name_category", "status"]);
        assert!(!request.custom_column_names.contains_key("id"));
        assert_eq!(request.custom_column_names["status"], "status");
        assert_eq!(request.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn empty_selection_builds_nothing() {
        let mut sel = selection();
        sel.select_all(true);
        sel.select_all(false);
        assert!(!sel.has_selection());
        assert!(sel.build_request("category", ExportFormat::Xlsx, None).is_none());
    }

    #[test]
    fn file_name_uses_format_extension() {
        assert_eq!(export_file_name("Categories", ExportFormat::Csv), "Categories.csv");
    }
}
