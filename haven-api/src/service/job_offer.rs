//! Job Offer Service
//!
//! Create, read, update and delete for job offers. Request bodies arrive as raw
//! bytes and are parsed here, so malformed JSON is a client error rather than
//! something the HTTP layer rejects.

use haven_core::domain::job_offer::{JobOffer, JobOfferDraft, OfferId};
use haven_core::domain::validation::{ValidationErrors, validate_draft};
use haven_core::dto::envelope::MessageResponse;
use haven_core::dto::job_offer::{CreatedResponse, JobOfferResponse};
use serde_json::{Map, Value};

use crate::repository::{JobOfferStore, StoreError};

/// Service error type
#[derive(Debug)]
pub enum OfferError {
    /// Body is not a JSON object; carries the parser message
    MalformedInput(String),
    ValidationFailed(ValidationErrors),
    NotFound(OfferId),
    StoreError(StoreError),
}

impl From<StoreError> for OfferError {
    fn from(err: StoreError) -> Self {
        OfferError::StoreError(err)
    }
}

pub type Result<T> = std::result::Result<T, OfferError>;

/// Validate and persist a new offer
pub async fn create_offer(store: &dyn JobOfferStore, payload: &[u8]) -> Result<CreatedResponse> {
    let fields = parse_payload(payload)?;
    let draft = merge_and_validate(JobOfferDraft::default(), &fields)?;

    let offer = store.create(draft).await?;

    tracing::info!("Job offer created: {}", offer.id);

    Ok(CreatedResponse {
        message: "Job offer saved successfully.".to_string(),
        id: offer.id,
    })
}

/// Get an offer by ID
pub async fn get_offer(store: &dyn JobOfferStore, id: &OfferId) -> Result<JobOfferResponse> {
    let job_offer = find_existing(store, id).await?;
    Ok(JobOfferResponse { job_offer })
}

/// Apply a partial payload to an existing offer
pub async fn update_offer(
    store: &dyn JobOfferStore,
    id: &OfferId,
    payload: &[u8],
) -> Result<MessageResponse> {
    let existing = find_existing(store, id).await?;

    let fields = parse_payload(payload)?;
    let draft = merge_and_validate(existing.draft(), &fields)?;

    // The row may have been deleted between the lookup and the write
    let offer = JobOffer::from_draft(existing.id, draft);
    if !store.update(&offer).await? {
        return Err(OfferError::NotFound(offer.id));
    }

    tracing::info!("Job offer updated: {}", offer.id);

    Ok(MessageResponse::new("Job offer updated successfully."))
}

/// Delete an offer
pub async fn delete_offer(store: &dyn JobOfferStore, id: &OfferId) -> Result<MessageResponse> {
    let existing = find_existing(store, id).await?;

    if !store.delete(&existing.id).await? {
        return Err(OfferError::NotFound(existing.id));
    }

    tracing::info!("Job offer deleted: {}", existing.id);

    Ok(MessageResponse::new("Job offer deleted successfully."))
}

async fn find_existing(store: &dyn JobOfferStore, id: &OfferId) -> Result<JobOffer> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| OfferError::NotFound(id.clone()))
}

// =============================================================================
// Payload handling
// =============================================================================

/// Parse a request body into a JSON object
fn parse_payload(payload: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(payload) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(OfferError::MalformedInput(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(OfferError::MalformedInput(e.to_string())),
    }
}

/// Merge payload fields onto `draft` and check the result
fn merge_and_validate(mut draft: JobOfferDraft, fields: &Map<String, Value>) -> Result<JobOfferDraft> {
    let mut violations = draft.merge_json(fields);
    violations.extend(validate_draft(&draft));

    let errors: ValidationErrors = violations.into_iter().collect();
    if errors.is_empty() {
        Ok(draft)
    } else {
        Err(OfferError::ValidationFailed(errors))
    }
}
