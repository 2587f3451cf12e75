/*
[INPUT]:  Error sources (validation, HTTP, API status, serialization, cancellation)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error type for the crate
[UPDATE]: When adding new error sources or changing error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::validate::InputError;

/// Main error type for the CES client
#[derive(Error, Debug)]
pub enum CesError {
    /// Request input rejected before any network access
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-200 status
    #[error("received status code {}: {body}", .status.as_u16())]
    Api { status: StatusCode, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller cancelled the request
    #[error("request cancelled")]
    Cancelled,
}

impl CesError {
    /// Check if the error was raised by client-side input validation
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CesError::InvalidInput(_))
    }

    /// Check if the error comes from a cancelled call
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CesError::Cancelled)
    }

    /// HTTP status attached to the error, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CesError::Api { status, .. } => Some(*status),
            CesError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        CesError::Api {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for CES operations
pub type Result<T> = std::result::Result<T, CesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Operation, Slot};

    #[test]
    fn test_api_error_display_contains_status_and_body() {
        let err = CesError::api_error(StatusCode::NOT_FOUND, "not found");
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_validation_error_classification() {
        let err: CesError = InputError::new(Operation::CoinCorrelate, Slot::From).into();
        assert!(err.is_validation_error());
        assert!(!err.is_cancelled());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "input not valid: one of ExchangeFrom or ExchangeFromID should be provided"
        );
    }

    #[test]
    fn test_cancelled() {
        assert!(CesError::Cancelled.is_cancelled());
        assert!(!CesError::Cancelled.is_validation_error());
    }
}
