use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use contracts::shared::modal_form::FormStatus;

/// Reply of a modal form POST
#[derive(Debug)]
pub enum FormReply {
    /// Stored; the host closes the modal and reloads
    Saved,
    /// Invalid; the host swaps in this fragment and keeps the form bound
    Invalid(String),
}

impl IntoResponse for FormReply {
    fn into_response(self) -> Response {
        match self {
            FormReply::Saved => Json(FormStatus::ok()).into_response(),
            FormReply::Invalid(html) => Html(html).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_saved_is_json() {
        let response = FormReply::Saved.into_response();
        let ct = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(ct.starts_with("application/json"));
    }

    #[test]
    fn test_invalid_is_html() {
        let response = FormReply::Invalid("<form></form>".into()).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let ct = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(ct.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_saved_body_is_ok_status() {
        let body = FormReply::Saved.into_response().into_body();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let status: FormStatus = serde_json::from_slice(&bytes).unwrap();
        assert!(status.is_ok());
        assert_eq!(status.html, None);
    }
}
