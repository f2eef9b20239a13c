use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name_category: String,
    #[serde(default)]
    pub slug_name_category: String,
    #[serde(default)]
    pub image_category: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Category {
    /// Treats an empty parent reference the same as a missing one.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }
}

pub const CATEGORY_STATUSES: [&str; 2] = ["Disponivel", "Indisponivel"];

/// One entry of the `PUT /category/updateOrder` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrderItem {
    pub id: String,
    pub order: u32,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub categories: Vec<CategoryOrderItem>,
}

/// Flat category list from a `GET /category/cms` body.
///
/// Entries may carry their subcategories nested under `children`; those are
/// lifted into the list as well. An id seen twice is kept once.
pub fn categories_from_payload(body: Value) -> Result<Vec<Category>> {
    let Value::Array(items) = body else {
        return Err(anyhow!("expected an array of categories"));
    };
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut pending: Vec<Value> = items.into_iter().rev().collect();
    while let Some(mut item) = pending.pop() {
        let children = item
            .as_object_mut()
            .and_then(|obj| obj.remove("children"))
            .unwrap_or(Value::Null);
        let category: Category = serde_json::from_value(item)?;
        if let Value::Array(children) = children {
            pending.extend(children.into_iter().rev());
        }
        if seen.insert(category.id.clone()) {
            out.push(category);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_backend_rows() {
        let category: Category =
            serde_json::from_value(serde_json::json!({ "id": "2", "parentId": "1" })).unwrap();
        assert_eq!(category.parent(), Some("1"));
        assert_eq!(category.order, 0);

        let root: Category =
            serde_json::from_value(serde_json::json!({ "id": "1", "parentId": null })).unwrap();
        assert_eq!(root.parent(), None);

        let blank: Category =
            serde_json::from_value(serde_json::json!({ "id": "3", "parentId": "" })).unwrap();
        assert_eq!(blank.parent(), None);
    }

    #[test]
    fn order_item_keeps_camel_case_parent() {
        let item = CategoryOrderItem { id: "5".into(), order: 2, parent_id: None };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "5", "order": 2, "parentId": null }));
    }

    #[test]
    fn nested_children_are_lifted() {
        let body = serde_json::json!([
            { "id": "1", "parentId": null, "children": [
                { "id": "2", "parentId": "1", "children": [] },
                { "id": "3", "parentId": "1" }
            ]},
            { "id": "2", "parentId": "1" },
            { "id": "4" }
        ]);
        let ids: Vec<String> = categories_from_payload(body)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(categories_from_payload(serde_json::json!({ "categories": [] })).is_err());
    }
}
