//! Error types for the CoinGecko client library.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// The main error type for all CoinGecko client operations.
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// Caller input was rejected before any request was sent.
    #[error("Invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string serialization error
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// CoinGecko answered with a non-success status.
    #[error("CoinGecko API error: {0}")]
    Api(ApiError),

    /// No response arrived within the configured bound.
    #[error("Request timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// The bound that elapsed
        timeout: Duration,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CoinGeckoError {
    /// The remote error, if the API rejected the call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            CoinGeckoError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error was raised locally before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoinGeckoError::Validation(_))
    }

    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CoinGeckoError::Timeout { .. })
    }
}

/// A parameter that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{field}` must be {expected}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// Expected type or shape
    pub expected: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
        }
    }
}

/// An error returned by CoinGecko itself.
///
/// The body is the JSON document the server sent, kept verbatim. CoinGecko uses
/// a few shapes, e.g. `{"error": "coin not found"}` or
/// `{"status": {"error_code": 429, "error_message": "..."}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Parsed error body (a JSON string if the body was not JSON)
    pub body: Value,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_message() {
            Some(message) => write!(f, "HTTP {}: {}", self.status, message),
            None => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}

impl ApiError {
    /// Create a new API error from a status and body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Human-readable error message, if the body carries one.
    pub fn error_message(&self) -> Option<&str> {
        if let Some(message) = self.body.get("error").and_then(Value::as_str) {
            return Some(message);
        }
        if let Some(message) = self
            .body
            .get("status")
            .and_then(|status| status.get("error_message"))
            .and_then(Value::as_str)
        {
            return Some(message);
        }
        self.body.as_str()
    }

    /// Numeric error code from a `status` object, if present.
    pub fn error_code(&self) -> Option<i64> {
        self.body
            .get("status")
            .and_then(|status| status.get("error_code"))
            .and_then(Value::as_i64)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429 || self.error_code() == Some(429)
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the server failed on its side.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_api_error_message_from_error_field() {
        let error = ApiError::new(404, json!({"error": "coin not found"}));
        assert_eq!(error.error_message(), Some("coin not found"));
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "HTTP 404: coin not found");
    }

    #[test]
    fn test_api_error_status_object() {
        let error = ApiError::new(
            429,
            json!({"status": {"error_code": 429, "error_message": "You've exceeded the Rate Limit"}}),
        );
        assert_eq!(error.error_code(), Some(429));
        assert_eq!(error.error_message(), Some("You've exceeded the Rate Limit"));
        assert!(error.is_rate_limit());
        assert!(!error.is_server_error());
    }

    #[test]
    fn test_api_error_display_without_message() {
        let error = ApiError::new(500, json!({"detail": 1}));
        assert_eq!(error.error_message(), None);
        assert_eq!(error.to_string(), r#"HTTP 500: {"detail":1}"#);
        assert!(error.is_server_error());
    }

    #[test]
    fn test_validation_error_display() {
        let error = CoinGeckoError::from(ValidationError::new("ids", "a non-empty string or list"));
        assert!(error.is_validation());
        assert_eq!(
            error.to_string(),
            "Invalid parameter: `ids` must be a non-empty string or list"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = CoinGeckoError::Timeout {
            timeout: Duration::from_millis(30_000),
        };
        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "Request timed out after 30000ms");
    }
}
