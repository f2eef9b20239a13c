//! Query parameters shared by every paged list endpoint of the CMS API.
//!
//! The same pairs travel in the browser address bar and in the list request,
//! so encoding lives here and both sides use [`ListQuery::to_pairs`].

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 5;
pub const DEFAULT_ORDER_BY: &str = "created_at";
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 20];
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Page, size, search, sort and date window of one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub order_by: String,
    pub order_direction: SortDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            order_by: DEFAULT_ORDER_BY.to_string(),
            order_direction: SortDirection::Desc,
            start_date: None,
            end_date: None,
        }
    }
}

impl ListQuery {
    /// Key/value pairs in wire order. Empty search and absent dates are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs.push(("orderBy", self.order_by.clone()));
        pairs.push(("orderDirection", self.order_direction.as_str().to_string()));
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format(DATE_FORMAT).to_string()));
        }
        pairs
    }

    /// Builds a query from decoded pairs. Unknown keys are ignored and any
    /// value that does not parse falls back to its default.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "page" => {
                    query.page = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|p| *p >= 1)
                        .unwrap_or(DEFAULT_PAGE);
                }
                "limit" => {
                    query.limit = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|l| PAGE_SIZE_OPTIONS.contains(l))
                        .unwrap_or(DEFAULT_LIMIT);
                }
                "search" => query.search = value.to_string(),
                "orderBy" => {
                    if !value.trim().is_empty() {
                        query.order_by = value.trim().to_string();
                    }
                }
                "orderDirection" => {
                    query.order_direction = SortDirection::parse(value).unwrap_or_default();
                }
                "startDate" => query.start_date = parse_date(value),
                "endDate" => query.end_date = parse_date(value),
                _ => {}
            }
        }
        query
    }

    /// Replaces a sort key that is not among the table's sortable columns.
    pub fn restrict_order_by(mut self, sortable: &[&str]) -> Self {
        if !sortable.is_empty() && !sortable.contains(&self.order_by.as_str()) {
            self.order_by = DEFAULT_ORDER_BY.to_string();
        }
        self
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// One page of records plus the backend's page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

/// Every list endpoint answers `{ "<items_key>": [...], "totalPages": n }`,
/// where the items key differs per resource.
pub fn decode_page<T: DeserializeOwned>(body: serde_json::Value, items_key: &str) -> Result<Page<T>> {
    let mut body = match body {
        serde_json::Value::Object(map) => map,
        other => return Err(anyhow!("expected an object envelope, got {}", other)),
    };
    let items = body
        .remove(items_key)
        .ok_or_else(|| anyhow!("response has no `{}` field", items_key))?;
    let items: Vec<T> = serde_json::from_value(items)?;
    let total_pages = body
        .get("totalPages")
        .and_then(|v| v.as_u64())
        .map(|n| n as u32)
        .unwrap_or(1);
    Ok(Page { items, total_pages })
}
