//! Generic response envelopes

use serde::{Deserialize, Serialize};

/// Success envelope with a human-readable message only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error envelope returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            None => write!(f, "{}", self.error),
            Some(serde_json::Value::String(details)) => write!(f, "{}: {}", self.error, details),
            Some(details) => write!(f, "{}: {}", self.error, details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_without_details_omits_field() {
        let body = serde_json::to_value(ErrorResponse::new("Job offer not found.")).unwrap();
        assert_eq!(body, json!({ "error": "Job offer not found." }));
    }

    #[test]
    fn test_error_display_includes_details() {
        let err = ErrorResponse::new("Internal Server Error").with_details(json!("pool timed out"));
        assert_eq!(err.to_string(), "Internal Server Error: pool timed out");

        let err = ErrorResponse::new("Validation failed")
            .with_details(json!({ "position": ["Position is required"] }));
        assert_eq!(
            err.to_string(),
            r#"Validation failed: {"position":["Position is required"]}"#
        );
    }
}
