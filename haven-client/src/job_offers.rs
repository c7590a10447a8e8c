//! Job offer API endpoints

use crate::HavenClient;
use crate::error::Result;
use haven_core::domain::job_offer::{JobOffer, OfferId};
use haven_core::dto::envelope::MessageResponse;
use haven_core::dto::job_offer::{CreatedResponse, JobOfferPayload, JobOfferResponse};

impl HavenClient {
    // =============================================================================
    // Job Offer Management
    // =============================================================================

    /// Create a job offer
    ///
    /// # Returns
    /// The confirmation message and the id assigned by the store
    pub async fn create_job_offer(&self, payload: &JobOfferPayload) -> Result<CreatedResponse> {
        let url = format!("{}/api/createJobOffer", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;

        self.handle_response(response).await
    }

    /// Get a job offer by ID
    pub async fn get_job_offer(&self, id: &OfferId) -> Result<JobOffer> {
        let url = format!("{}/api/getJobOffer", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("id", id.as_str())])
            .send()
            .await?;

        let envelope: JobOfferResponse = self.handle_response(response).await?;
        Ok(envelope.job_offer)
    }

    /// Update the fields set in `payload`; absent fields keep their value
    pub async fn update_job_offer(
        &self,
        id: &OfferId,
        payload: &JobOfferPayload,
    ) -> Result<MessageResponse> {
        let url = format!("{}/api/updateJobOffer", self.base_url);
        let response = self
            .client
            .put(&url)
            .query(&[("id", id.as_str())])
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a job offer
    pub async fn delete_job_offer(&self, id: &OfferId) -> Result<MessageResponse> {
        let url = format!("{}/api/deleteJobOffer", self.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("id", id.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_job_offer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/createJobOffer"))
            .and(body_json(json!({ "description": "Build APIs", "position": "Engineer" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Job offer saved successfully.",
                "id": "12"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let created = client
            .create_job_offer(&JobOfferPayload::new("Build APIs", "Engineer"))
            .await
            .unwrap();

        assert_eq!(created.id.as_str(), "12");
        assert_eq!(created.message, "Job offer saved successfully.");
    }

    #[tokio::test]
    async fn test_get_job_offer_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/getJobOffer"))
            .and(query_param("id", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobOffer": { "id": "12", "description": "Build APIs", "position": "Engineer" }
            })))
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let offer = client.get_job_offer(&"12".into()).await.unwrap();

        assert_eq!(offer.id.as_str(), "12");
        assert_eq!(offer.position, "Engineer");
    }

    #[tokio::test]
    async fn test_partial_update_sends_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/updateJobOffer"))
            .and(query_param("id", "12"))
            .and(body_json(json!({ "position": "Lead" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Job offer updated successfully."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let payload = JobOfferPayload {
            description: None,
            position: Some("Lead".to_string()),
        };
        let response = client.update_job_offer(&"12".into(), &payload).await.unwrap();

        assert_eq!(response.message, "Job offer updated successfully.");
    }

    #[tokio::test]
    async fn test_not_found_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/deleteJobOffer"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "error": "Job offer not found." })),
            )
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let err = client.delete_job_offer(&"99".into()).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "API error (status 404): Job offer not found."
        );
    }

    #[tokio::test]
    async fn test_validation_details_surface_in_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/createJobOffer"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Validation failed",
                "details": { "position": ["Position is required"] }
            })))
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let payload = JobOfferPayload {
            description: Some("d".to_string()),
            position: None,
        };
        let err = client.create_job_offer(&payload).await.unwrap_err();

        assert!(err.is_client_error());
        assert!(err.to_string().contains("Position is required"));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "Internal Server Error",
                "details": "store unavailable"
            })))
            .mount(&server)
            .await;

        let client = HavenClient::new(server.uri());
        let err = client.get_job_offer(&"1".into()).await.unwrap_err();

        assert!(err.is_server_error());
        assert!(!err.is_not_found());
    }
}
