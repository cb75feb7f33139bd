//! Error types for the Honeybadger API client.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::helpers::truncate_body;

/// Base error type for Honeybadger operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be built (bad base URL, path, or header value).
    #[error("Invalid request: {0}")]
    Build(String),

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Connection failure, timeout, or any other transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A successful response whose body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// No auth token could be resolved.
    #[error("Authentication failed: {0}")]
    Auth(String),
}

impl Error {
    /// The HTTP status code, when this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        self.as_api().map(|e| e.status_code)
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Raised when the API answers with a non-2xx status.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("HTTP {status_code}: {message}")]
pub struct ApiError {
    pub status_code: u16,
    /// Human-readable message normalized from the response body.
    pub message: String,
    /// The `errors` field as the server sent it, if the body carried one.
    pub errors: Option<ErrorsField>,
}

/// The `errors` member of an error body.
///
/// Endpoints disagree on its type: most send a plain string, some send an
/// array or object of structured messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorsField {
    Message(String),
    Structured(Value),
}

impl ErrorsField {
    /// Flatten to a single display string.
    ///
    /// Arrays are joined with `", "` (string items verbatim, anything else as
    /// compact JSON); objects and other scalars render as compact JSON.
    pub fn to_message(&self) -> String {
        match self {
            ErrorsField::Message(s) => s.clone(),
            ErrorsField::Structured(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            ErrorsField::Structured(other) => other.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Option<ErrorsField>,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            errors: None,
        }
    }

    /// Classify an error response. Never fails: a body that is not JSON, or
    /// JSON without `errors`, falls back to the raw text, and an empty body
    /// falls back to the status reason phrase.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let status_code = status.as_u16();
        if let Ok(ErrorBody {
            errors: Some(errors),
        }) = serde_json::from_slice::<ErrorBody>(body)
        {
            return Self {
                status_code,
                message: errors.to_message(),
                errors: Some(errors),
            };
        }

        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        let message = if text.is_empty() {
            status
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP {}", status_code))
        } else {
            truncate_body(text)
        };
        Self::new(status_code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_errors_used_verbatim() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, br#"{"errors": "Access denied"}"#);
        assert_eq!(err.status_code, 403);
        assert_eq!(err.message, "Access denied");
        assert_eq!(
            err.errors,
            Some(ErrorsField::Message("Access denied".to_string()))
        );
    }

    #[test]
    fn array_errors_are_joined() {
        let body = br#"{"errors": ["Name can't be blank", {"field": "url"}]}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(err.message, r#"Name can't be blank, {"field":"url"}"#);
        assert!(matches!(err.errors, Some(ErrorsField::Structured(_))));
    }

    #[test]
    fn object_errors_render_compact() {
        let body = br#"{"errors": {"name": ["is taken"]}}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(err.message, r#"{"name":["is taken"]}"#);
    }

    #[test]
    fn html_body_falls_back_to_text() {
        let body = b"<html><body>Bad Gateway</body></html>\n";
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, body);
        assert_eq!(err.status_code, 502);
        assert_eq!(err.message, "<html><body>Bad Gateway</body></html>");
        assert!(err.errors.is_none());
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.message, "Not Found");

        let odd = StatusCode::from_u16(599).unwrap();
        assert_eq!(ApiError::from_response(odd, b"").message, "HTTP 599");
    }

    #[test]
    fn json_without_errors_key_keeps_raw_body() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, br#"{"error":"nope"}"#);
        assert_eq!(err.message, r#"{"error":"nope"}"#);
    }

    #[test]
    fn error_helpers() {
        let err = Error::from(ApiError::new(404, "Not Found"));
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error: HTTP 404: Not Found");
        assert_eq!(Error::Build("x".into()).status_code(), None);
    }
}
