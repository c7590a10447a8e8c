//! Core domain types
//!
//! This module contains the job offer entity shared by the API (which persists
//! it) and the client (which reads it back), plus the field rules every
//! persisted offer has to satisfy.

pub mod job_offer;
pub mod validation;
