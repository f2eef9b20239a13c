use serde::{Deserialize, Serialize};

pub const PUBLICATION_STATUSES: [&str; 2] = ["Disponivel", "Indisponivel"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingPublication {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub clicks: i64,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub is_popup: bool,
    #[serde(default)]
    pub publish_at_start: Option<String>,
    #[serde(default)]
    pub publish_at_end: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `GET /marketing_publication/all_publications?marketing_content_id=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationDetail {
    pub unique_marketing_content: MarketingPublication,
}

/// Editable fields sent to `PUT /marketing_publication/update` from the
/// detail screen. Image and popup placement are managed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePublicationRequest {
    #[serde(rename = "marketingPublication_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub redirect_url: Option<String>,
    pub status: String,
    pub publish_at_start: Option<String>,
    pub publish_at_end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_envelope_and_update_keys() {
        let body = serde_json::json!({
            "unique_marketing_content": { "id": "m1", "title": "Summer", "is_popup": true }
        });
        let detail: PublicationDetail = serde_json::from_value(body).unwrap();
        assert_eq!(detail.unique_marketing_content.title, "Summer");
        assert!(detail.unique_marketing_content.is_popup);

        let update = UpdatePublicationRequest {
            id: "m1".into(),
            title: "Summer".into(),
            description: None,
            redirect_url: Some("https://blog.com".into()),
            status: "Disponivel".into(),
            publish_at_start: None,
            publish_at_end: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["marketingPublication_id"], "m1");
        assert!(json.get("id").is_none());
    }
}
