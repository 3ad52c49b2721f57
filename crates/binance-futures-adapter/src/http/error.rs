/*
[INPUT]:  Error sources (HTTP, API, validation, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange rejected the request
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    /// Order parameters failed local validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// API credentials were not provided
    #[error(
        "Missing API credentials: pass --api-key/--api-secret or set \
         BINANCE_API_KEY/BINANCE_API_SECRET"
    )]
    MissingCredentials,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BinanceError {
    /// Create an API error from HTTP status, exchange code, and message
    pub fn api_error(status: StatusCode, code: i64, message: impl Into<String>) -> Self {
        BinanceError::Api {
            status: status.as_u16(),
            code,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        BinanceError::Validation {
            message: message.into(),
        }
    }

    /// Check if the error is caused by bad usage rather than the exchange
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            BinanceError::Validation { .. } | BinanceError::MissingCredentials
        )
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = BinanceError::api_error(StatusCode::BAD_REQUEST, -1121, "Invalid symbol.");
        match err {
            BinanceError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, -1121);
                assert_eq!(message, "Invalid symbol.");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_usage_error_predicate() {
        assert!(BinanceError::validation("quantity must be > 0").is_usage_error());
        assert!(BinanceError::MissingCredentials.is_usage_error());
        assert!(!BinanceError::api_error(StatusCode::BAD_REQUEST, -1121, "bad").is_usage_error());
        assert!(!BinanceError::InvalidResponse("not json".to_string()).is_usage_error());
    }

    #[test]
    fn test_api_error_display_carries_exchange_code() {
        let err = BinanceError::api_error(StatusCode::BAD_REQUEST, -2019, "Margin is insufficient.");
        let message = err.to_string();
        assert!(message.contains("-2019"));
        assert!(message.contains("Margin is insufficient."));
    }
}
