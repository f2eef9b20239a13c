use serde::{Deserialize, Serialize};

pub const COMMENT_STATUSES: [&str; 5] = ["Fila", "Aprovar", "Rejeitar", "Spam", "Lixeira"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub post_title: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub comment_like: i64,
    #[serde(default)]
    pub created_at: String,
}
