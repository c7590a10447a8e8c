//! Service Module
//!
//! Business logic layer for the job offer API.
//! Services sit between the HTTP handlers and the store and own the offer rules.

pub mod job_offer;

// Re-export for convenience
pub use job_offer as job_offer_service;
