//! Error types for calls against the football API.
//!
//! Every dispatcher call returns an [`ApiResult`]. Failures are data: nothing
//! past the dispatcher panics or propagates an unhandled error, and the tool
//! layer turns the failure into a text response.

use thiserror::Error;

/// Result of a single call against the football API.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while calling the football API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built (e.g. unserializable query parameters).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP call itself failed: connection refused, DNS, body read, ...
    #[error("{0}")]
    Transport(String),

    /// The API answered with a non-success status. The body is discarded.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body was not JSON of the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// HTTP status code, if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(ApiError::Status(500).status_code(), Some(500));
        assert_eq!(ApiError::transport("boom").status_code(), None);
    }

    #[test]
    fn test_transport_error_is_verbatim() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_success_round_trip() {
        let ok: ApiResult<Value> = Ok(Value::Null);
        assert!(ok.is_ok());
        assert_eq!(assert_ok!(ok), Value::Null);

        let zero: ApiResult<u32> = Ok(0);
        assert_eq!(assert_ok!(zero), 0);

        let payload = json!({"response": [], "results": 0});
        let ok: ApiResult<Value> = Ok(payload.clone());
        assert_eq!(ok.unwrap(), payload);
    }

    #[test]
    fn test_failure_round_trip() {
        let err: ApiResult<Value> = Err(ApiError::transport(""));
        assert!(!err.is_ok());
        assert_eq!(assert_err!(err), ApiError::Transport(String::new()));

        let err: ApiResult<()> = Err(ApiError::Status(0));
        assert_eq!(err.unwrap_err(), ApiError::Status(0));
    }

    #[test]
    fn test_from_serde_error_is_decode() {
        let parse = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err: ApiError = parse.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
