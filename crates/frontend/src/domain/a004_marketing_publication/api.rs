use contracts::domain::a004_marketing_publication::{
    MarketingPublication, PublicationDetail, UpdatePublicationRequest,
};

use crate::shared::api_utils::{get_json, put_json, with_query, ApiError};

pub async fn fetch_publication(id: &str, token: Option<&str>) -> Result<MarketingPublication, ApiError> {
    let path = with_query(
        "/marketing_publication/all_publications",
        &[("marketing_content_id", id.to_string())],
    );
    let detail: PublicationDetail = get_json(&path, token).await?;
    Ok(detail.unique_marketing_content)
}

pub async fn update_publication(request: &UpdatePublicationRequest, token: Option<&str>) -> Result<(), ApiError> {
    put_json("/marketing_publication/update", request, token).await
}
