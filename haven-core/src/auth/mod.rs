//! Identity-provider integration
//!
//! Both Talent Haven sites delegate sign-in to a Microsoft identity platform
//! tenant: the public job-seeker site to an Azure AD B2C user flow, the admin
//! portal to a Microsoft Entra ID tenant. This module holds the configuration
//! for either provider and the session state built on top of it. Token
//! acquisition itself belongs to the identity library and is not modelled.

pub mod config;
pub mod session;

pub use config::{AuthConfig, CacheLocation, CacheOptions, IdentityProvider};
pub use session::{Account, AccountCache, AuthEvent, AuthSession, LoginRequest, LogoutRequest};

use thiserror::Error;

/// Errors raised while building the auth configuration or its URLs
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more required environment variables are missing or empty
    #[error("Environment variables are not properly configured. Missing: {}", .0.join(", "))]
    MissingEnvironment(Vec<String>),

    /// A configured URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
