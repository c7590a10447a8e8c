//! Talent Haven HTTP Client
//!
//! A small, typed HTTP client for the Talent Haven job offer API.
//!
//! # Example
//!
//! ```no_run
//! use haven_client::HavenClient;
//! use haven_core::dto::job_offer::JobOfferPayload;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HavenClient::new("http://localhost:7071");
//!
//!     let created = client
//!         .create_job_offer(&JobOfferPayload::new("Build APIs", "Backend Engineer"))
//!         .await?;
//!
//!     println!("Created job offer: {}", created.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod job_offers;

// Re-export commonly used types
pub use error::{ClientError, Result};

use haven_core::dto::envelope::ErrorResponse;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Talent Haven API
#[derive(Debug, Clone)]
pub struct HavenClient {
    /// Base URL of the API (e.g., "http://localhost:7071")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl HavenClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use haven_client::HavenClient;
    ///
    /// let client = HavenClient::new("http://localhost:7071");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("API returned {}: {}", status, error_text);
            return Err(ClientError::api_error(
                status.as_u16(),
                error_message(&error_text),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Prefer the API's `{error, details}` envelope over the raw body text
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => envelope.to_string(),
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}
