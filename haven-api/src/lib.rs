//! Talent Haven job offer API
//!
//! HTTP service exposing create, read, update and delete for job offers over a
//! configurable store.

pub mod api;
pub mod config;
#[cfg(feature = "postgres")]
pub mod db;
pub mod repository;
pub mod service;
