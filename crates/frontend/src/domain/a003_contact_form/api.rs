use contracts::domain::a003_contact_form::ContactForm;

use crate::shared::api_utils::{get_json, with_query, ApiError};

pub async fn fetch_contact(id: &str, token: Option<&str>) -> Result<ContactForm, ApiError> {
    let path = with_query("/contacts_form/contact", &[("form_contact_id", id.to_string())]);
    get_json(&path, token).await
}
