use contracts::domain::a001_category::aggregate::{
    categories_from_payload, Category, CategoryOrderItem, UpdateOrderRequest,
};
use serde_json::Value;

use crate::shared::api_utils::{get_json, put_json, ApiError};

/// Every category, unpaged, for the tree view.
pub async fn fetch_all(token: Option<&str>) -> Result<Vec<Category>, ApiError> {
    let body: Value = get_json("/category/cms", token).await?;
    categories_from_payload(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn update_order(categories: Vec<CategoryOrderItem>, token: Option<&str>) -> Result<(), ApiError> {
    put_json("/category/updateOrder", &UpdateOrderRequest { categories }, token).await
}
