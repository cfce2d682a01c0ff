//! API utilities for frontend-backend communication

use contracts::system::auth::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::system::auth::storage;

/// Backend origin, set at build time for a separately served frontend
/// (`GUINEAPIGS_API_BASE=http://127.0.0.1:3000 trunk serve`)
const CONFIGURED_API_BASE: Option<&str> = option_env!("GUINEAPIGS_API_BASE");

/// Backend origin; empty means the page's own origin
///
/// The backend serves the built frontend itself, so same-origin paths reach
/// it on whatever port `[server]` configures.
pub fn api_base() -> String {
    resolve_api_base(CONFIGURED_API_BASE)
}

fn resolve_api_base(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

/// Full URL for an API path such as `/api/dashboard`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the stored bearer token, if any
pub fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Message for a failed response: the server's `error` field or the status
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed: {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// POST without a body
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// POST url-encoded fields
pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_defaults_to_same_origin() {
        assert_eq!(resolve_api_base(None), "");
        assert_eq!(resolve_api_base(Some("  ")), "");
        assert_eq!(
            resolve_api_base(Some("http://127.0.0.1:3000/")),
            "http://127.0.0.1:3000"
        );
    }
}
