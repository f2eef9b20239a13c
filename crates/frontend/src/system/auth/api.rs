use contracts::system::auth::{SessionResponse, SignInRequest, UserInfo};

use crate::shared::api_utils::{get_json, post_json, with_query, ApiError};

/// Exchanges credentials for a token.
pub async fn sign_in(email: String, password: String) -> Result<SessionResponse, ApiError> {
    let request = SignInRequest { email, password };
    post_json("/user/session", &request, None).await
}

/// Profile of the signed-in user, including the role.
pub async fn fetch_me(user_id: &str, token: &str) -> Result<UserInfo, ApiError> {
    let path = with_query("/user/me", &[("user_id", user_id.to_string())]);
    get_json(&path, Some(token)).await
}
