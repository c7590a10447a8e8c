//! API Error Handling
//!
//! Unified error types and conversion for API responses. Every failure is
//! rendered as an `ErrorResponse` JSON envelope.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use haven_core::domain::validation::ValidationErrors;
use haven_core::dto::envelope::ErrorResponse;
use serde_json::Value;

use crate::repository::StoreError;
use crate::service::job_offer_service::OfferError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MalformedInput(String),
    ValidationFailed(ValidationErrors),
    StoreError(StoreError),
    /// The request could not be read (e.g. body over the size limit)
    Rejected {
        status: StatusCode,
        message: String,
    },
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ApiError::MalformedInput(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid JSON format").with_details(Value::String(details)),
            ),
            ApiError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed")
                    .with_details(serde_json::to_value(&errors).unwrap_or(Value::Null)),
            ),
            ApiError::Rejected { status, message } => (status, ErrorResponse::new(message)),
            ApiError::StoreError(err) => {
                tracing::error!("Store error: {:?}", err);
                internal(err.to_string())
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal(details: String) -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("Internal Server Error").with_details(Value::String(details)),
    )
}

impl From<OfferError> for ApiError {
    fn from(err: OfferError) -> Self {
        match err {
            OfferError::MalformedInput(details) => ApiError::MalformedInput(details),
            OfferError::ValidationFailed(errors) => ApiError::ValidationFailed(errors),
            OfferError::NotFound(_) => ApiError::NotFound("Job offer not found.".to_string()),
            OfferError::StoreError(err) => ApiError::StoreError(err),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
