use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File formats accepted by `POST /export_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Xlsx, ExportFormat::Csv];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Csv => "text/csv;charset=utf-8;",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "Excel XLSX",
            ExportFormat::Csv => "Excel CSV",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "xlsx" => Some(ExportFormat::Xlsx),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub user_id: Option<String>,
    #[serde(rename = "tableName")]
    pub table_name: String,
    pub columns: Vec<String>,
    pub format: ExportFormat,
    #[serde(rename = "customColumnNames")]
    pub custom_column_names: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_backend_field_names() {
        let request = ExportRequest {
            user_id: Some("u1".into()),
            table_name: "category".into(),
            columns: vec!["id".into(), "name_category".into()],
            format: ExportFormat::Csv,
            custom_column_names: BTreeMap::from([("id".to_string(), "ID".to_string())]),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tableName"], "category");
        assert_eq!(json["format"], "csv");
        assert_eq!(json["customColumnNames"]["id"], "ID");
        assert_eq!(json["columns"][1], "name_category");
    }

    #[test]
    fn format_parse_matches_extension() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::parse(format.extension()), Some(format));
        }
        assert_eq!(ExportFormat::parse("pdf"), None);
    }
}
