/// Utilities for date and time formatting
///
/// Backend timestamps arrive as ISO strings (`2024-03-15T14:02:26.123Z`);
/// tables show them as `15/03/2024 14:02`.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// True for `YYYY-MM-DDTHH:MM:SS[.fff][Z]` strings.
pub fn is_iso_datetime(value: &str) -> bool {
    value.len() >= 19 && value.as_bytes().get(10) == Some(&b'T') && parse_iso(value).is_some()
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_iso(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date or datetime string to DD/MM/YYYY
pub fn format_date(date_str: &str) -> String {
    if let Some(dt) = parse_iso(date_str) {
        return dt.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

/// ISO timestamp as a `datetime-local` input value; empty when unparsable.
pub fn to_datetime_local(iso: &str) -> String {
    parse_iso(iso)
        .map(|dt| dt.format(DATETIME_LOCAL).to_string())
        .unwrap_or_default()
}

/// `datetime-local` input value back to the backend's ISO form, read as UTC.
pub fn from_datetime_local(value: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL)
        .ok()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:00.000Z").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_iso_detection() {
        assert!(is_iso_datetime("2024-03-15T14:02:26.123Z"));
        assert!(is_iso_datetime("2024-03-15T14:02:26"));
        assert!(!is_iso_datetime("2024-03-15"));
        assert!(!is_iso_datetime("Disponivel"));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn datetime_local_inputs() {
        assert_eq!(to_datetime_local("2024-03-15T14:02:26.123Z"), "2024-03-15T14:02");
        assert_eq!(to_datetime_local(""), "");
        assert_eq!(from_datetime_local("2024-03-15T14:02").as_deref(), Some("2024-03-15T14:02:00.000Z"));
        assert_eq!(from_datetime_local("15/03/2024"), None);
        assert_eq!(from_datetime_local(""), None);
    }
}
