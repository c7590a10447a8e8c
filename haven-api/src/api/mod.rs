//! API Module
//!
//! HTTP API layer for the job offer service.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod job_offer;

use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::api::error::ApiError;
use crate::repository::SharedStore;

/// Create the main API router with all endpoints
pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Job offer endpoints
        .route("/api/createJobOffer", post(job_offer::create_job_offer))
        .route("/api/handleSaveJobOffer", post(job_offer::create_job_offer))
        .route("/api/getJobOffer", get(job_offer::get_job_offer))
        .route("/api/updateJobOffer", put(job_offer::update_job_offer))
        .route("/api/deleteJobOffer", delete(job_offer::delete_job_offer))
        // Add state and middleware
        .with_state(store)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Render a handler panic as the same 500 envelope as any other failure
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::InternalError(details).into_response()
}
