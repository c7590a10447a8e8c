//! Configuration module
//!
//! Handles CLI configuration: where the API lives and where accounts are cached.

use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the job offer API
    pub api_url: String,
    /// Path of the JSON account cache
    pub account_cache: PathBuf,
}
