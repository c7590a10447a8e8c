//! Error types for the Talent Haven client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response (connection refused, timeout, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    ApiError {
        status: u16,
        /// The envelope's `error`, followed by its `details` when present
        message: String,
    },

    /// A 2xx body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// The offer does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Missing id, malformed body or failed validation (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if (400..500).contains(status))
    }

    /// Store or server failure (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let err = ClientError::api_error(400, "ID is required to delete a job offer.");
        assert!(err.is_client_error());
        assert!(!err.is_not_found());
        assert!(!err.is_server_error());

        let err = ClientError::api_error(503, "Service Unavailable");
        assert!(err.is_server_error());
        assert!(!err.is_client_error());

        let err = ClientError::ParseError("eof".to_string());
        assert!(!err.is_client_error() && !err.is_server_error());
    }
}
