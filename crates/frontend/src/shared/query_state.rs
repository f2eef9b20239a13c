//! Query state of a list screen, mirrored in the address bar.
//!
//! Screens never fetch on their own: they read [`QueryStateController::query`]
//! and push changes through [`QueryStateController::set_filter`]. Every change
//! is written back to the URL with `history.replaceState`, so reload and
//! back-navigation restore the same page.

use contracts::shared::list_query::{ListQuery, SortDirection, PAGE_SIZE_OPTIONS};
use chrono::NaiveDate;
use leptos::prelude::*;
use std::collections::HashSet;
use web_sys::window;

/// Encodes a query as the address-bar query string (without the leading `?`).
pub fn encode(query: &ListQuery) -> String {
    query
        .to_pairs()
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a query string into decoded `(key, value)` pairs. `+` reads as a
/// space; a pair that is not valid percent-encoding is skipped on its own.
fn raw_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// Decodes `location.search`. Each parameter falls back to its default on
/// its own; unknown keys are ignored and the first occurrence of a repeated
/// key wins.
pub fn decode(search: &str) -> ListQuery {
    let mut seen = HashSet::new();
    let pairs: Vec<(String, String)> = raw_pairs(search)
        .into_iter()
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect();
    log::debug!("list query parameters: {:?}", pairs);
    ListQuery::from_pairs(pairs)
}

/// Partial change of a [`ListQuery`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPatch {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<SortDirection>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

impl QueryPatch {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }

    pub fn limit(limit: u32) -> Self {
        Self { limit: Some(limit), ..Default::default() }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self { search: Some(text.into()), ..Default::default() }
    }

    pub fn order_by(key: impl Into<String>) -> Self {
        Self { order_by: Some(key.into()), ..Default::default() }
    }

    pub fn order_direction(direction: SortDirection) -> Self {
        Self { order_direction: Some(direction), ..Default::default() }
    }

    pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    /// Header click: flips the direction on the active column, otherwise
    /// sorts the new column ascending.
    pub fn toggle_sort(current: &ListQuery, key: &str) -> Self {
        if current.order_by == key {
            Self::order_direction(current.order_direction.toggled())
        } else {
            Self {
                order_by: Some(key.to_string()),
                order_direction: Some(SortDirection::Asc),
                ..Default::default()
            }
        }
    }

    /// Merges the patch. A change to anything but the page sends the user
    /// back to page 1.
    pub fn apply(&self, current: &ListQuery) -> ListQuery {
        let mut next = current.clone();
        if let Some(limit) = self.limit.filter(|l| PAGE_SIZE_OPTIONS.contains(l)) {
            next.limit = limit;
        }
        if let Some(search) = &self.search {
            next.search = search.clone();
        }
        if let Some(order_by) = self.order_by.as_ref().filter(|k| !k.is_empty()) {
            next.order_by = order_by.clone();
        }
        if let Some(direction) = self.order_direction {
            next.order_direction = direction;
        }
        if let Some(start) = self.start_date {
            next.start_date = start;
        }
        if let Some(end) = self.end_date {
            next.end_date = end;
        }

        let filters_changed = next.limit != current.limit
            || next.search != current.search
            || next.order_by != current.order_by
            || next.order_direction != current.order_direction
            || next.start_date != current.start_date
            || next.end_date != current.end_date;

        if filters_changed {
            next.page = 1;
        } else if let Some(page) = self.page {
            next.page = page.max(1);
        }
        next
    }
}

/// Address `history.replaceState` should move to: the query string when
/// one is given, the bare path when the query is being cleared. `None` when
/// the URL already matches.
fn url_target(pathname: &str, current_search: &str, query_string: Option<&str>) -> Option<String> {
    match query_string {
        Some(qs) => {
            let target = format!("?{}", qs);
            (current_search != target).then_some(target)
        }
        None => Some(if pathname.is_empty() { "/".to_string() } else { pathname.to_string() }),
    }
}

fn write_url(query_string: Option<&str>) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let pathname = location.pathname().unwrap_or_default();
    let current = location.search().unwrap_or_default();
    let Some(target) = url_target(&pathname, &current, query_string) else {
        return;
    };
    match w.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target)) {
                log::warn!("failed to update the address bar to {}: {:?}", target, e);
            }
        }
        Err(e) => log::warn!("history is not available: {:?}", e),
    }
}

/// Owns the query of one list screen.
#[derive(Clone, Copy)]
pub struct QueryStateController {
    state: RwSignal<ListQuery>,
    sortable: StoredValue<Vec<&'static str>>,
}

impl QueryStateController {
    /// Reads the initial state from the current URL.
    pub fn initialize(sortable: Vec<&'static str>) -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = decode(&search).restrict_order_by(&sortable);
        log::debug!("list query initialized: {:?}", initial);
        write_url(Some(&encode(&initial)));
        Self {
            state: RwSignal::new(initial),
            sortable: StoredValue::new(sortable),
        }
    }

    pub fn query(&self) -> Signal<ListQuery> {
        self.state.into()
    }

    pub fn current(&self) -> ListQuery {
        self.state.get_untracked()
    }

    pub fn sortable(&self) -> Vec<&'static str> {
        self.sortable.get_value()
    }

    /// Applies the patch, mirrors the result in the URL and signals a refetch.
    pub fn set_filter(&self, patch: QueryPatch) {
        let current = self.state.get_untracked();
        let next = patch.apply(&current).restrict_order_by(&self.sortable.get_value());
        write_url(Some(&encode(&next)));
        self.state.set(next);
    }

    /// Refetches the current state without changing it.
    pub fn refresh(&self) {
        let current = self.state.get_untracked();
        self.state.set(current);
    }

    /// Restores every default and clears the URL query string.
    pub fn reset(&self) {
        write_url(None);
        let defaults = ListQuery::default().restrict_order_by(&self.sortable.get_value());
        self.state.set(defaults);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ListQuery {
        ListQuery {
            page: 4,
            limit: 10,
            search: "summer sale & promo".to_string(),
            order_by: "title".to_string(),
            order_direction: SortDirection::Asc,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
        }
    }

    #[test]
    fn decode_inverts_encode() {
        let q = sample();
        assert_eq!(decode(&encode(&q)), q);
        assert_eq!(decode(&format!("?{}", encode(&q))), q);
        let defaults = ListQuery::default();
        assert_eq!(decode(&encode(&defaults)), defaults);
    }

    #[test]
    fn missing_and_malformed_params_use_defaults() {
        assert_eq!(decode(""), ListQuery::default());
        assert_eq!(decode("?page=x&limit=ten"), ListQuery::default());
        let q = decode("?page=2");
        assert_eq!(q.page, 2);
        assert_eq!(q.limit, 5);
    }

    #[test]
    fn non_page_changes_reset_page() {
        let current = sample();
        let patches = vec![
            QueryPatch::search("winter"),
            QueryPatch::limit(20),
            QueryPatch::order_by("created_at"),
            QueryPatch::order_direction(SortDirection::Desc),
            QueryPatch::date_range(None, None),
        ];
        for patch in patches {
            assert_eq!(patch.apply(&current).page, 1, "{:?}", patch);
        }
    }

    #[test]
    fn page_only_change_keeps_filters() {
        let current = sample();
        let next = QueryPatch::page(7).apply(&current);
        assert_eq!(next.page, 7);
        assert_eq!(next.search, current.search);
        assert_eq!(QueryPatch::page(0).apply(&current).page, 1);
    }

    #[test]
    fn unchanged_filter_does_not_reset_page() {
        let current = sample();
        let next = QueryPatch::search(current.search.clone()).apply(&current);
        assert_eq!(next, current);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let current = ListQuery::default();
        let patch = QueryPatch::search("news");
        let once = patch.apply(&current);
        let twice = patch.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(encode(&once), encode(&twice));
    }

    #[test]
    fn page_size_outside_allowed_set_is_ignored() {
        let current = ListQuery::default();
        assert_eq!(QueryPatch::limit(13).apply(&current), current);
    }

    #[test]
    fn header_click_toggles_or_switches_column() {
        let current = sample();
        let same = QueryPatch::toggle_sort(&current, "title").apply(&current);
        assert_eq!(same.order_direction, SortDirection::Desc);
        let other = QueryPatch::toggle_sort(&current, "created_at").apply(&current);
        assert_eq!(other.order_by, "created_at");
        assert_eq!(other.order_direction, SortDirection::Asc);
        assert_eq!(other.page, 1);
    }

    #[test]
    fn unrelated_or_repeated_keys_keep_valid_values() {
        for search in [
            "?page=3&limit=10&tags[]=a&tags[]=b",
            "?page=3&limit=10&page=4",
            "?page=3&limit=10&filter[a]=1",
            "?page=3&limit=10&broken=%E0%A4%A&",
        ] {
            let q = decode(search);
            assert_eq!((q.page, q.limit), (3, 10), "{}", search);
        }
    }

    #[test]
    fn plus_and_percent_escapes_are_decoded() {
        let q = decode("?search=summer+sale%20%26%20promo&orderBy=title");
        assert_eq!(q.search, "summer sale & promo");
        assert_eq!(q.order_by, "title");
    }

    #[test]
    fn reset_clears_the_whole_query_string() {
        assert_eq!(
            url_target("/categories", "?page=2&limit=5", None).as_deref(),
            Some("/categories")
        );
        assert_eq!(url_target("", "?page=2", None).as_deref(), Some("/"));
    }

    #[test]
    fn url_is_rewritten_only_when_it_changes() {
        assert_eq!(url_target("/comments", "?page=2", Some("page=2")), None);
        assert_eq!(
            url_target("/comments", "?page=2", Some("page=3")).as_deref(),
            Some("?page=3")
        );
    }
}
