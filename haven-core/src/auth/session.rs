//! Sign-in session
//!
//! An `AuthSession` is built once per process from an `AuthConfig` and the
//! accounts the identity library already has cached, then handed by reference
//! to whatever needs the signed-in user. It tracks which account is active and
//! produces the requests a UI would hand to the identity library's login and
//! logout popups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{AuthConfig, AuthError};

/// A signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable account key across sign-ins
    pub home_account_id: String,
    pub username: String,
    pub name: Option<String>,
    /// When the last successful sign-in for this account was observed
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(home_account_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            home_account_id: home_account_id.into(),
            username: username.into(),
            name: None,
            last_login_at: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Events the identity library reports back to the application
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoginSuccess { account: Account },
    LoginFailure { error: String },
    LogoutSuccess,
}

/// Persistable snapshot of the session's accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCache {
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Parameters for an interactive sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub scopes: Vec<String>,
    pub authorize_url: Url,
}

/// Parameters for an interactive sign-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutRequest {
    pub account: Option<Account>,
    pub end_session_url: Url,
}

#[derive(Debug, Clone)]
pub struct AuthSession {
    config: AuthConfig,
    accounts: Vec<Account>,
    active: Option<String>,
}

impl AuthSession {
    /// Build the session from configuration and previously cached accounts.
    ///
    /// If the cache names no usable active account but holds at least one
    /// account, the first cached account becomes active.
    pub fn initialize(config: AuthConfig, cache: AccountCache) -> Self {
        let active = cache
            .active
            .filter(|id| cache.accounts.iter().any(|a| &a.home_account_id == id))
            .or_else(|| cache.accounts.first().map(|a| a.home_account_id.clone()));

        Self {
            config,
            accounts: cache.accounts,
            active,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn active_account(&self) -> Option<&Account> {
        let active = self.active.as_ref()?;
        self.accounts.iter().find(|a| &a.home_account_id == active)
    }

    /// Make a known account active; returns false if the id is unknown
    pub fn set_active_account(&mut self, home_account_id: &str) -> bool {
        if self
            .accounts
            .iter()
            .any(|a| a.home_account_id == home_account_id)
        {
            self.active = Some(home_account_id.to_string());
            true
        } else {
            false
        }
    }

    /// React to an identity-library event.
    ///
    /// A successful login makes its account active (adding or refreshing it in
    /// the known accounts); a logout forgets the active account.
    pub fn handle_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::LoginSuccess { mut account } => {
                if account.last_login_at.is_none() {
                    account.last_login_at = Some(Utc::now());
                }
                let id = account.home_account_id.clone();
                match self.accounts.iter_mut().find(|a| a.home_account_id == id) {
                    Some(existing) => *existing = account,
                    None => self.accounts.push(account),
                }
                self.active = Some(id);
            }
            AuthEvent::LogoutSuccess => {
                if let Some(active) = self.active.take() {
                    self.accounts.retain(|a| a.home_account_id != active);
                }
            }
            AuthEvent::LoginFailure { .. } => {}
        }
    }

    /// Request for the login popup
    pub fn login_request(&self) -> Result<LoginRequest, AuthError> {
        let scope = self.config.scopes.join(" ");
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_mode", "query"),
            ("scope", scope.as_str()),
        ];
        if let Some(account) = self.active_account() {
            params.push(("login_hint", account.username.as_str()));
        }

        let authorize_url = Url::parse_with_params(
            &format!("{}/oauth2/v2.0/authorize", self.config.authority()),
            &params,
        )?;

        Ok(LoginRequest {
            scopes: self.config.scopes.clone(),
            authorize_url,
        })
    }

    /// Request for the logout popup
    pub fn logout_request(&self) -> Result<LogoutRequest, AuthError> {
        let base = format!("{}/oauth2/v2.0/logout", self.config.authority());
        let end_session_url = match &self.config.post_logout_redirect_uri {
            Some(redirect) => {
                Url::parse_with_params(&base, &[("post_logout_redirect_uri", redirect.as_str())])?
            }
            None => Url::parse(&base)?,
        };

        Ok(LogoutRequest {
            account: self.active_account().cloned(),
            end_session_url,
        })
    }

    /// Snapshot for persisting between runs
    pub fn to_cache(&self) -> AccountCache {
        AccountCache {
            active: self.active.clone(),
            accounts: self.accounts.clone(),
        }
    }
}
