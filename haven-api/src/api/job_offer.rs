//! Job Offer API Handlers
//!
//! HTTP endpoints for job offer management. Bodies are taken as raw bytes and
//! handed to the service, which owns JSON parsing.

use axum::{
    Json,
    body::Bytes,
    extract::{RawQuery, State, rejection::BytesRejection},
};
use haven_core::domain::job_offer::OfferId;
use haven_core::dto::envelope::MessageResponse;
use haven_core::dto::job_offer::{CreatedResponse, JobOfferResponse};

use crate::api::error::{ApiError, ApiResult};
use crate::repository::SharedStore;
use crate::service::job_offer_service;

/// Query parameters for endpoints addressing a single offer
#[derive(Debug, Default)]
pub struct OfferQuery {
    pub id: Option<String>,
}

impl OfferQuery {
    /// Parse a raw query string; a repeated `id` resolves to its first value
    pub fn parse(raw: Option<&str>) -> Self {
        let id = raw.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "id")
                .map(|(_, value)| value.into_owned())
        });
        Self { id }
    }

    /// The requested id; absent and empty are both rejected
    fn require_id(self, action: &str) -> ApiResult<OfferId> {
        match self.id {
            Some(id) if !id.is_empty() => Ok(OfferId::new(id)),
            _ => Err(ApiError::BadRequest(format!(
                "ID is required to {} a job offer.",
                action
            ))),
        }
    }
}

// =============================================================================
// Job Offer Endpoints
// =============================================================================

/// POST /api/createJobOffer
/// Create a job offer from a JSON body
pub async fn create_job_offer(
    State(store): State<SharedStore>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    tracing::debug!("Creating job offer");
    let body = body?;

    let created = job_offer_service::create_offer(store.as_ref(), &body).await?;
    Ok(Json(created))
}

/// GET /api/getJobOffer?id=
/// Get a job offer by ID
pub async fn get_job_offer(
    State(store): State<SharedStore>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<JobOfferResponse>> {
    let id = OfferQuery::parse(query.as_deref()).require_id("retrieve")?;
    tracing::debug!("Getting job offer: {}", id);

    let response = job_offer_service::get_offer(store.as_ref(), &id).await?;
    Ok(Json(response))
}

/// PUT /api/updateJobOffer?id=
/// Update the fields present in the JSON body
pub async fn update_job_offer(
    State(store): State<SharedStore>,
    RawQuery(query): RawQuery,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = OfferQuery::parse(query.as_deref()).require_id("update")?;
    let body = body?;
    tracing::debug!("Updating job offer: {}", id);

    let response = job_offer_service::update_offer(store.as_ref(), &id, &body).await?;
    Ok(Json(response))
}

/// DELETE /api/deleteJobOffer?id=
/// Delete a job offer
pub async fn delete_job_offer(
    State(store): State<SharedStore>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<MessageResponse>> {
    let id = OfferQuery::parse(query.as_deref()).require_id("delete")?;
    tracing::debug!("Deleting job offer: {}", id);

    let response = job_offer_service::delete_offer(store.as_ref(), &id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_takes_first_id() {
        assert_eq!(OfferQuery::parse(Some("id=1&id=2")).id.as_deref(), Some("1"));
        assert_eq!(OfferQuery::parse(Some("id=1&id=")).id.as_deref(), Some("1"));
        assert_eq!(OfferQuery::parse(Some("other=x&id=a%20b")).id.as_deref(), Some("a b"));
    }

    #[test]
    fn test_query_without_id() {
        assert!(OfferQuery::parse(None).id.is_none());
        assert!(OfferQuery::parse(Some("ID=1")).id.is_none());
        assert!(OfferQuery::parse(Some("id=")).require_id("retrieve").is_err());
    }
}
