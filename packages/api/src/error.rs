//! # API error taxonomy
//!
//! Two failure kinds cross the client boundary:
//!
//! - [`ApiError::Http`] — transport failure, no structured response was
//!   received (connection refused, DNS, aborted request).
//! - [`ApiError::Backend`] — the backend answered with a non-success status
//!   and (usually) a structured [`ErrorBody`].
//!
//! Every call site converts an `ApiError` into a transient notification via
//! [`ApiError::message`]; nothing rethrows past a view. The one failure the
//! client branches on is the backend's "already purchased" flag, surfaced
//! through [`ApiError::already_purchased`].

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error ({status}): {}", .body.message())]
    Backend { status: u16, body: ErrorBody },
}

impl ApiError {
    /// User-facing message for a toast.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http(_) => "Network or server error".to_string(),
            ApiError::Backend { body, .. } => body.message(),
        }
    }

    /// Whether the backend flagged the order as a duplicate purchase.
    pub fn already_purchased(&self) -> bool {
        matches!(self, ApiError::Backend { body, .. } if body.already_purchased)
    }
}

/// One string or a list of validation messages.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    One(String),
    Many(Vec<String>),
}

/// Tolerant decode of the backend's error payloads.
///
/// The backend is not consistent about its error field (`error`, `errors`,
/// or `message`, string or array), so all are optional and [`message`]
/// picks the first present.
///
/// [`message`]: ErrorBody::message
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    #[serde(default)]
    pub errors: Option<ErrorDetail>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "alreadyPurchased")]
    pub already_purchased: bool,
}

impl ErrorBody {
    /// Build a body from a bare message (non-JSON error responses).
    pub fn from_text(text: String) -> Self {
        Self {
            message: Some(text),
            ..Self::default()
        }
    }

    /// First available message, array variants joined with newlines.
    pub fn message(&self) -> String {
        let detail = self.error.as_ref().or(self.errors.as_ref());
        match detail {
            Some(ErrorDetail::One(msg)) => msg.clone(),
            Some(ErrorDetail::Many(msgs)) => msgs.join("\n"),
            None => self
                .message
                .clone()
                .unwrap_or_else(|| "Something went wrong".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_single_string() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message(), "Invalid credentials");
        assert!(!body.already_purchased);
    }

    #[test]
    fn test_error_body_array_joins_lines() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":["Email is required","Password too short"]}"#)
                .unwrap();
        assert_eq!(body.message(), "Email is required\nPassword too short");
    }

    #[test]
    fn test_error_body_errors_and_message_fallbacks() {
        let body: ErrorBody = serde_json::from_str(r#"{"errors":"Error in logging out"}"#).unwrap();
        assert_eq!(body.message(), "Error in logging out");

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Course not found"}"#).unwrap();
        assert_eq!(body.message(), "Course not found");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), "Something went wrong");
    }

    #[test]
    fn test_already_purchased_flag() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"alreadyPurchased":true,"message":"dup"}"#).unwrap();
        let err = ApiError::Backend { status: 400, body };
        assert!(err.already_purchased());

        let err = ApiError::Backend {
            status: 400,
            body: ErrorBody::from_text("no flag".to_string()),
        };
        assert!(!err.already_purchased());
    }
}
