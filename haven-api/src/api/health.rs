//! Health Check API Handler
//!
//! Simple health check endpoint for monitoring.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::repository::SharedStore;

/// GET /health
/// Reports liveness and which store this instance was configured with
pub async fn health_check(State(store): State<SharedStore>) -> Json<Value> {
    Json(json!({ "status": "ok", "store": store.backend() }))
}
