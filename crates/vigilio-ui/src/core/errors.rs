//! Request failures and their normalisation into banner text.
//!
//! # Design
//! - Keep transport, status, and decode failures distinct so callers can branch on them.
//! - Produce display strings in one place; views never inspect payload shapes.
//! - Oversized payloads are reported back to the caller for logging instead of being shown.

use serde_json::Value;
use thiserror::Error;

/// Fallback text when a payload cannot be shown.
pub const GENERIC_ERROR: &str = "An error occured";
/// Fallback text when a non-string error carries no message.
pub const OPAQUE_ERROR: &str = "An error occurred.";
/// Messages this long or longer are logged rather than displayed.
pub const DISPLAY_LIMIT: usize = 200;

/// Failure surfaced by the HTTP client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Parsed body when the server returned one.
        body: Option<Value>,
    },
    /// The response body did not match the expected shape.
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

/// Banner text plus an optional payload that was too large to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorDisplay {
    /// Text to show in the error panel.
    pub message: String,
    /// Raw payload to send to the console instead of the banner.
    pub suppressed: Option<String>,
}

impl ApiError {
    /// Normalise the failure into banner text.
    ///
    /// Order of preference: the body's `detail` field, the body itself, then
    /// the error's own description.
    #[must_use]
    pub fn display(&self) -> ErrorDisplay {
        match self {
            Self::Status {
                body: Some(body), ..
            } => match body.get("detail") {
                Some(detail) if is_present(detail) => display_value(detail),
                _ => display_value(body),
            },
            Self::Status { body: None, .. } | Self::Transport(_) | Self::Decode(_) => {
                limit(self.to_string())
            }
        }
    }

    /// Shortcut for [`ApiError::display`] when the suppressed payload is not needed.
    #[must_use]
    pub fn message(&self) -> String {
        self.display().message
    }

    /// HTTP status when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn display_value(value: &Value) -> ErrorDisplay {
    match value {
        Value::String(text) => limit(text.clone()),
        Value::Object(map) if map.is_empty() => ErrorDisplay {
            message: GENERIC_ERROR.to_string(),
            suppressed: None,
        },
        Value::Null => ErrorDisplay {
            message: OPAQUE_ERROR.to_string(),
            suppressed: None,
        },
        other => ErrorDisplay {
            message: other.to_string(),
            suppressed: None,
        },
    }
}

fn limit(message: String) -> ErrorDisplay {
    if message.chars().count() < DISPLAY_LIMIT {
        ErrorDisplay {
            message,
            suppressed: None,
        }
    } else {
        ErrorDisplay {
            message: GENERIC_ERROR.to_string(),
            suppressed: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(body: Value) -> ApiError {
        ApiError::Status {
            status: 400,
            body: Some(body),
        }
    }

    #[test]
    fn detail_field_wins() {
        let err = status(json!({"detail": "Not allowed", "other": 1}));
        assert_eq!(err.message(), "Not allowed");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn body_is_used_without_detail() {
        assert_eq!(status(json!("plain text")).message(), "plain text");
        assert_eq!(
            status(json!({"name": ["required"]})).message(),
            r#"{"name":["required"]}"#
        );
    }

    #[test]
    fn empty_object_body_falls_back_to_generic_text() {
        assert_eq!(status(json!({})).message(), GENERIC_ERROR);
    }

    #[test]
    fn transport_errors_use_their_description() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.message(), "network request failed: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn long_strings_are_suppressed_and_reported() {
        let long = "x".repeat(DISPLAY_LIMIT);
        let shown = status(json!({ "detail": long.clone() })).display();
        assert_eq!(shown.message, GENERIC_ERROR);
        assert_eq!(shown.suppressed, Some(long));

        let short = "y".repeat(DISPLAY_LIMIT - 1);
        assert_eq!(status(json!(short.clone())).message(), short);
    }

    #[test]
    fn missing_body_uses_status_description() {
        let err = ApiError::Status {
            status: 502,
            body: None,
        };
        assert_eq!(err.message(), "request failed with status 502");
    }
}
