//! # API Error Types
//!
//! Typed error handling for the bistro ordering backend.
//! All fallible operations return `Result<T, ApiError>`.

use thiserror::Error;

/// Core error type for all API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or expired identity token
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated, but role or identity-match check failed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Document not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment gateway API error
    #[error("Gateway error [{provider}]: {message}")]
    Gateway { provider: String, message: String },

    /// Network/HTTP error communicating with an external service
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Aggregation or unexpected store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::InvalidRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Configuration(_) => 500,
            ApiError::Gateway { .. } => 502,
            ApiError::Network(_) => 503,
            ApiError::Serialization(_) => 500,
            ApiError::Internal(_) => 500,
        }
    }

    /// Returns true if this error counts as a gateway failure at the
    /// checkout boundary (timeouts included, per the no-retry policy)
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, ApiError::Gateway { .. } | ApiError::Network(_))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), 401);
        assert_eq!(ApiError::Forbidden("not admin".into()).status_code(), 403);
        assert_eq!(
            ApiError::Gateway {
                provider: "stripe".into(),
                message: "declined".into()
            }
            .status_code(),
            502
        );
        assert_eq!(ApiError::Internal("aggregation".into()).status_code(), 500);
    }

    #[test]
    fn test_gateway_failure_classification() {
        assert!(ApiError::Network("timeout".into()).is_gateway_failure());
        assert!(ApiError::Gateway {
            provider: "stripe".into(),
            message: "bad key".into()
        }
        .is_gateway_failure());
        assert!(!ApiError::Unauthorized.is_gateway_failure());
    }
}
