use contracts::system::users::CreateUserRequest;

use crate::shared::api_utils::{post_json, ApiError};

pub async fn create_user(request: &CreateUserRequest, token: Option<&str>) -> Result<(), ApiError> {
    post_json::<_, serde_json::Value>("/user/create", request, token).await?;
    Ok(())
}
