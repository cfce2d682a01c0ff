//! Wire protocol between the modal form host and the form endpoints
//!
//! A form endpoint answers GET with an HTML fragment. It answers POST with
//! `{"status":"ok"}` when the submission was stored, and with a replacement
//! fragment (usually the same form carrying error messages) otherwise.

use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "ok";

/// DOM id of the form inside a fragment
pub const FORM_ID: &str = "modal-form";
/// DOM id of the element whose content is replaced by fragments
pub const CONTENT_ID: &str = "modal-content";
/// DOM id of the overlay
pub const MODAL_ID: &str = "modal";
/// DOM id of the submit button inside a fragment
pub const SUBMIT_ID: &str = "submit-btn";
/// Class carried by elements that open a modal
pub const TRIGGER_CLASS: &str = "modal-btn";

/// JSON status reply of a form endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl FormStatus {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            html: None,
        }
    }

    pub fn error(html: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            html: Some(html.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// What the host does with a POST reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalFormOutcome {
    /// Close the modal and reload the page
    Saved,
    /// Replace the modal content and keep the form bound
    Rerender(String),
}

impl ModalFormOutcome {
    /// Classify a reply body
    ///
    /// JSON is recognized either by content type or by shape, so a fragment
    /// served as `text/html` never needs to parse.
    pub fn from_response(content_type: Option<&str>, body: &str) -> Self {
        let declared_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);
        let looks_json = body.trim_start().starts_with('{');

        if declared_json || looks_json {
            if let Ok(status) = serde_json::from_str::<FormStatus>(body) {
                if status.is_ok() {
                    return ModalFormOutcome::Saved;
                }
                return ModalFormOutcome::Rerender(status.html.unwrap_or_else(|| body.to_string()));
            }
        }
        ModalFormOutcome::Rerender(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status_is_saved() {
        assert_eq!(
            ModalFormOutcome::from_response(Some("application/json"), r#"{"status":"ok"}"#),
            ModalFormOutcome::Saved
        );
        // shape is enough even without a content type
        assert_eq!(
            ModalFormOutcome::from_response(None, r#" {"status": "ok"}"#),
            ModalFormOutcome::Saved
        );
    }

    #[test]
    fn test_html_fragment_is_rerendered() {
        let html = r#"<form id="modal-form"><span class="error">required</span></form>"#;
        assert_eq!(
            ModalFormOutcome::from_response(Some("text/html; charset=utf-8"), html),
            ModalFormOutcome::Rerender(html.to_string())
        );
    }

    #[test]
    fn test_other_status_uses_embedded_html() {
        let body = serde_json::to_string(&FormStatus::error("<p>bad</p>")).unwrap();
        assert_eq!(
            ModalFormOutcome::from_response(Some("application/json"), &body),
            ModalFormOutcome::Rerender("<p>bad</p>".to_string())
        );
        let bare = r#"{"status":"error"}"#;
        assert_eq!(
            ModalFormOutcome::from_response(Some("application/json"), bare),
            ModalFormOutcome::Rerender(bare.to_string())
        );
    }

    #[test]
    fn test_status_ok_serializes_without_html() {
        assert_eq!(
            serde_json::to_string(&FormStatus::ok()).unwrap(),
            r#"{"status":"ok"}"#
        );
    }
}
