//! Identity-provider configuration
//!
//! Values are injected through the environment at deploy time; the variable
//! names are shared with the front-end build so one `.env` serves both.

use serde::{Deserialize, Serialize};

use super::AuthError;

const USER_FLOW_VAR: &str = "VITE_REACT_APP_USER_FLOW";
const TENANT_NAME_VAR: &str = "VITE_REACT_APP_TENANT_NAME";
const CLIENT_ID_VAR: &str = "VITE_REACT_APP_AZURE_CLIENT_ID";
const ADMIN_CLIENT_ID_VAR: &str = "VITE_REACT_APP_AZURE_ADMIN_CLIENT_ID";
const ADMIN_TENANT_ID_VAR: &str = "VITE_REACT_APP_ADMIN_TENANT_ID";
const REDIRECT_AFTER_LOGIN_VAR: &str = "VITE_REACT_REDIRECT_URI_AFTER_LOGIN";
const REDIRECT_AFTER_LOGOUT_VAR: &str = "VITE_REACT_REDIRECT_URI_AFTER_LOGOUT";

/// Which identity platform a site signs in against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityProvider {
    /// Azure AD B2C tenant with a sign-up/sign-in user flow (job-seeker site)
    B2c {
        tenant_name: String,
        user_flow: String,
    },
    /// Microsoft Entra ID tenant (admin portal)
    EntraId { tenant_id: String },
}

/// Where the identity library keeps its token cache in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CacheLocation {
    LocalStorage,
}

impl std::fmt::Display for CacheLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheLocation::LocalStorage => write!(f, "localStorage"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    pub location: CacheLocation,
    /// Mirror auth state into cookies for browsers that drop storage on redirect
    pub store_auth_state_in_cookie: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            location: CacheLocation::LocalStorage,
            store_auth_state_in_cookie: true,
        }
    }
}

/// Configuration for one site's identity client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Application (client) id registered with the tenant
    pub client_id: String,
    pub provider: IdentityProvider,
    /// Where the provider sends the user after sign-in
    pub redirect_uri: String,
    /// Where the provider sends the user after sign-out
    pub post_logout_redirect_uri: Option<String>,
    /// Return to the page that started the sign-in instead of `redirect_uri`
    pub navigate_to_login_request_url: bool,
    pub cache: CacheOptions,
    /// Scopes requested at sign-in
    pub scopes: Vec<String>,
}

impl AuthConfig {
    /// Job-seeker site configuration (Azure AD B2C)
    pub fn users_site(
        tenant_name: impl Into<String>,
        user_flow: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        post_logout_redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            provider: IdentityProvider::B2c {
                tenant_name: tenant_name.into(),
                user_flow: user_flow.into(),
            },
            redirect_uri: redirect_uri.into(),
            post_logout_redirect_uri: Some(post_logout_redirect_uri.into()),
            navigate_to_login_request_url: true,
            cache: CacheOptions::default(),
            scopes: vec!["openid".into(), "profile".into(), "email".into()],
        }
    }

    /// Admin portal configuration (Microsoft Entra ID)
    pub fn admin_site(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            provider: IdentityProvider::EntraId {
                tenant_id: tenant_id.into(),
            },
            redirect_uri: redirect_uri.into(),
            post_logout_redirect_uri: None,
            navigate_to_login_request_url: false,
            cache: CacheOptions::default(),
            scopes: vec!["User.Read".into()],
        }
    }

    /// Job-seeker site configuration from environment variables
    pub fn users_site_from_env() -> Result<Self, AuthError> {
        Self::users_site_from_lookup(|key| std::env::var(key).ok())
    }

    /// Admin portal configuration from environment variables
    pub fn admin_site_from_env() -> Result<Self, AuthError> {
        Self::admin_site_from_lookup(|key| std::env::var(key).ok())
    }

    /// Job-seeker site configuration from an arbitrary key lookup
    pub fn users_site_from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [user_flow, tenant_name, client_id, redirect, post_logout] = require(
            &lookup,
            [
                USER_FLOW_VAR,
                TENANT_NAME_VAR,
                CLIENT_ID_VAR,
                REDIRECT_AFTER_LOGIN_VAR,
                REDIRECT_AFTER_LOGOUT_VAR,
            ],
        )?;

        Ok(Self::users_site(
            tenant_name,
            user_flow,
            client_id,
            redirect,
            post_logout,
        ))
    }

    /// Admin portal configuration from an arbitrary key lookup
    pub fn admin_site_from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [client_id, tenant_id, redirect] = require(
            &lookup,
            [
                ADMIN_CLIENT_ID_VAR,
                ADMIN_TENANT_ID_VAR,
                REDIRECT_AFTER_LOGIN_VAR,
            ],
        )?;

        Ok(Self::admin_site(tenant_id, client_id, redirect))
    }

    /// Authority URL the identity client talks to
    pub fn authority(&self) -> String {
        match &self.provider {
            IdentityProvider::B2c {
                tenant_name,
                user_flow,
            } => format!(
                "https://{0}.b2clogin.com/{0}.onmicrosoft.com/{1}",
                tenant_name, user_flow
            ),
            IdentityProvider::EntraId { tenant_id } => {
                format!("https://login.microsoftonline.com/{}", tenant_id)
            }
        }
    }

    /// Hosts trusted as authorities besides the well-known Microsoft ones
    pub fn known_authorities(&self) -> Vec<String> {
        match &self.provider {
            IdentityProvider::B2c { tenant_name, .. } => {
                vec![format!("{}.b2clogin.com", tenant_name)]
            }
            IdentityProvider::EntraId { .. } => Vec::new(),
        }
    }
}

/// Read every key, failing with the full list of missing ones
fn require<F, const N: usize>(lookup: &F, keys: [&str; N]) -> Result<[String; N], AuthError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let values = keys.map(|key| match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => value,
        None => {
            missing.push(key.to_string());
            String::new()
        }
    });

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(AuthError::MissingEnvironment(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_b2c_authority() {
        let config = AuthConfig::users_site(
            "talenthaven",
            "B2C_1_signupsignin",
            "client",
            "http://localhost:5173/",
            "http://localhost:5173/bye",
        );

        assert_eq!(
            config.authority(),
            "https://talenthaven.b2clogin.com/talenthaven.onmicrosoft.com/B2C_1_signupsignin"
        );
        assert_eq!(config.known_authorities(), vec!["talenthaven.b2clogin.com"]);
        assert_eq!(config.scopes, vec!["openid", "profile", "email"]);
        assert!(config.navigate_to_login_request_url);
    }

    #[test]
    fn test_entra_authority() {
        let config = AuthConfig::admin_site("0000-tenant", "admin-client", "http://localhost/");
        assert_eq!(
            config.authority(),
            "https://login.microsoftonline.com/0000-tenant"
        );
        assert!(config.known_authorities().is_empty());
        assert_eq!(config.scopes, vec!["User.Read"]);
        assert_eq!(config.cache.location, CacheLocation::LocalStorage);
        assert!(config.cache.store_auth_state_in_cookie);
    }

    #[test]
    fn test_users_site_from_lookup() {
        let config = AuthConfig::users_site_from_lookup(lookup(&[
            (USER_FLOW_VAR, "B2C_1_flow"),
            (TENANT_NAME_VAR, "haven"),
            (CLIENT_ID_VAR, "abc"),
            (REDIRECT_AFTER_LOGIN_VAR, "http://localhost/in"),
            (REDIRECT_AFTER_LOGOUT_VAR, "http://localhost/out"),
        ]))
        .unwrap();

        assert_eq!(config.client_id, "abc");
        assert_eq!(
            config.post_logout_redirect_uri.as_deref(),
            Some("http://localhost/out")
        );
    }

    #[test]
    fn test_missing_variables_are_all_reported() {
        let err = AuthConfig::admin_site_from_lookup(lookup(&[
            (ADMIN_CLIENT_ID_VAR, "abc"),
            (REDIRECT_AFTER_LOGIN_VAR, "  "),
        ]))
        .unwrap_err();

        match err {
            AuthError::MissingEnvironment(missing) => {
                assert_eq!(missing, vec![ADMIN_TENANT_ID_VAR, REDIRECT_AFTER_LOGIN_VAR]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
