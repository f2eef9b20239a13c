//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL, the request helpers every screen goes
//! through, and the error type surfaced to notifications.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const BACKEND_PORT: u16 = 3333;

/// Errors of a single request as seen by the UI.
///
/// Every variant ends up as an error notification; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("You are not signed in")]
    NotAuthenticated,
    #[error("Could not reach the server: {0}")]
    Transport(String),
    #[error("The server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected server response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Get the base URL for API requests
///
/// `CMS_API_URL` set at build time wins; otherwise the URL is derived from
/// the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3333"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("CMS_API_URL") {
        return configured.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/category/cms");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Public URL of an uploaded file (category thumbnails, publication banners).
pub fn files_url(file_name: &str) -> String {
    format!("{}/files/{}", api_base(), file_name)
}

/// Appends percent-encoded pairs to a path.
pub fn with_query<K: AsRef<str>>(path: &str, pairs: &[(K, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k.as_ref()), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Pulls the human-readable message out of a rejected response body.
///
/// The backend answers `{"error": "..."}`; anything else is passed through trimmed.
pub fn rejection_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = json.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    body.trim().to_string()
}

fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status,
        message: rejection_message(&body),
    })
}

/// GET a path relative to [`api_base`] and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = authorized(Request::get(&api_url(path)), token).send().await?;
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B, T>(path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    ensure_ok(request.send().await?)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn put_json<B: Serialize>(path: &str, body: &B, token: Option<&str>) -> Result<(), ApiError> {
    let request = authorized(Request::put(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    ensure_ok(request.send().await?).await?;
    Ok(())
}

/// DELETE with a JSON body; bulk deletes carry their id list this way.
pub async fn delete_json<B: Serialize>(path: &str, body: &B, token: Option<&str>) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    ensure_ok(request.send().await?).await?;
    Ok(())
}

/// POST expecting a binary body back (exports).
pub async fn post_for_bytes<B: Serialize>(path: &str, body: &B, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
    let request = authorized(Request::post(&api_url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    ensure_ok(request.send().await?)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_are_percent_encoded() {
        let url = with_query(
            "/category/cms/all_categories",
            &[("page", "1".to_string()), ("search", "café & bar".to_string())],
        );
        assert_eq!(url, "/category/cms/all_categories?page=1&search=caf%C3%A9%20%26%20bar");
        let empty: [(&str, String); 0] = [];
        assert_eq!(with_query("/user/me", &empty), "/user/me");
    }

    #[test]
    fn rejection_prefers_backend_error_field() {
        assert_eq!(rejection_message(r#"{"error":"Category not found"}"#), "Category not found");
        assert_eq!(rejection_message(r#"{"message":"Forbidden"}"#), "Forbidden");
        assert_eq!(rejection_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
