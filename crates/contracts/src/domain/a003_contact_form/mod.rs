use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub id: String,
    #[serde(default)]
    pub name_user: String,
    #[serde(default)]
    pub email_user: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// Field name as spelled by the backend.
    #[serde(default, rename = "menssage")]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: String,
}
