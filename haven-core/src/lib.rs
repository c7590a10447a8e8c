//! Haven Core
//!
//! Core types and abstractions for the Talent Haven job board.
//!
//! This crate contains:
//! - Domain types: the job offer record and its field rules
//! - DTOs: JSON envelopes exchanged between the API and its clients
//! - Auth: identity-provider configuration and the sign-in session model

pub mod auth;
pub mod domain;
pub mod dto;
