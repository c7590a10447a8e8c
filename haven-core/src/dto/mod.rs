//! Data Transfer Objects for the HTTP API
//!
//! Every API call answers with a JSON envelope: a success envelope carrying a
//! `message` (and sometimes a payload), or an error envelope carrying `error`
//! and optional `details`. These types are shared by the server that builds
//! the envelopes and the client that reads them.

pub mod envelope;
pub mod job_offer;
