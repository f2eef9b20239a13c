use super::inline_edit::FieldUpdate;
use crate::shared::api_utils::{delete_json, get_json, post_for_bytes, put_json, with_query, ApiError};
use contracts::shared::export::ExportRequest;
use contracts::shared::list_query::{decode_page, ListQuery, Page};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

pub const EXPORT_PATH: &str = "/export_data";

/// Backend endpoints of one list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableResource {
    pub list_path: &'static str,
    /// Key of the row array in the list response.
    pub items_key: &'static str,
    pub update_path: Option<&'static str>,
    /// Id key in the update body, e.g. `category_id`.
    pub id_field: &'static str,
    pub delete_path: Option<&'static str>,
    /// Id list key in the delete body, e.g. `category_ids`.
    pub delete_ids_field: &'static str,
    pub export_table: &'static str,
    pub export_title: &'static str,
    /// Route prefix of the detail screen; rows without one are not clickable.
    pub detail_route: Option<&'static str>,
}

impl TableResource {
    pub fn list_url(&self, query: &ListQuery) -> String {
        with_query(self.list_path, &query.to_pairs())
    }

    pub fn delete_body(&self, ids: &[String]) -> Value {
        let mut map = Map::new();
        map.insert(self.delete_ids_field.to_string(), json!(ids));
        Value::Object(map)
    }

    pub fn detail_href(&self, id: &str) -> Option<String> {
        self.detail_route
            .map(|route| format!("{}/{}", route.trim_end_matches('/'), urlencoding::encode(id)))
    }

    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        query: &ListQuery,
        token: Option<&str>,
    ) -> Result<Page<T>, ApiError> {
        let body: Value = get_json(&self.list_url(query), token).await?;
        decode_page(body, self.items_key).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn update_field(&self, update: &FieldUpdate, token: Option<&str>) -> Result<(), ApiError> {
        let path = self
            .update_path
            .ok_or_else(|| ApiError::Validation("This table is read-only".to_string()))?;
        put_json(path, &update.body(self.id_field), token).await
    }

    pub async fn delete_records(&self, ids: &[String], token: Option<&str>) -> Result<(), ApiError> {
        let path = self
            .delete_path
            .ok_or_else(|| ApiError::Validation("Records of this table can not be deleted".to_string()))?;
        delete_json(path, &self.delete_body(ids), token).await
    }

    pub async fn export(&self, request: &ExportRequest, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
        post_for_bytes(EXPORT_PATH, request, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortDirection;

    const COMMENTS: TableResource = TableResource {
        list_path: "/comment/cms/get_comments",
        items_key: "comments",
        update_path: Some("/comment/update"),
        id_field: "comment_id",
        delete_path: Some("/comment/delete_comment"),
        delete_ids_field: "comment_ids",
        export_table: "comment",
        export_title: "Comments",
        detail_route: None,
    };

    #[test]
    fn list_url_carries_query() {
        let query = ListQuery {
            search: "spam".into(),
            order_direction: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(
            COMMENTS.list_url(&query),
            "/comment/cms/get_comments?page=1&limit=5&search=spam&orderBy=created_at&orderDirection=asc"
        );
    }

    #[test]
    fn delete_body_uses_resource_key() {
        let ids = vec!["c1".to_string(), "c2".to_string()];
        assert_eq!(COMMENTS.delete_body(&ids), json!({ "comment_ids": ["c1", "c2"] }));
    }

    #[test]
    fn detail_href_only_when_routed() {
        assert_eq!(COMMENTS.detail_href("c1"), None);
        let contacts = TableResource { detail_route: Some("/contacts/"), ..COMMENTS };
        assert_eq!(contacts.detail_href("a b").as_deref(), Some("/contacts/a%20b"));
    }
}
