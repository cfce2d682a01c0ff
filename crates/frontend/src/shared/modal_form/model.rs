use contracts::shared::modal_form::ModalFormOutcome;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, error_message, with_auth};

/// GET the form fragment for an action URL
pub async fn fetch_fragment(url: &str) -> Result<String, String> {
    let response = with_auth(Request::get(&api_url(url)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_body(response).await.map(|(_, body)| body)
}

/// POST serialized fields back to the action URL
pub async fn submit_form(url: &str, body: String) -> Result<ModalFormOutcome, String> {
    let response = with_auth(Request::post(&api_url(url)))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    let (content_type, body) = read_body(response).await?;
    Ok(ModalFormOutcome::from_response(content_type.as_deref(), &body))
}

async fn read_body(response: Response) -> Result<(Option<String>, String), String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ok((content_type, body))
}
