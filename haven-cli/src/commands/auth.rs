//! Auth command handlers
//!
//! Inspects the sign-in configuration of either site and manages the local
//! account cache. The interactive sign-in itself happens in a browser; these
//! commands print the URLs and record the outcome.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use colored::*;
use haven_core::auth::{Account, AuthConfig, AuthEvent, AuthSession};

use crate::account_cache;
use crate::config::Config;

/// Which site's identity client to use
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Site {
    /// Public site (B2C tenant)
    Users,
    /// Admin site (organisational tenant)
    Admin,
}

impl Site {
    fn auth_config(self) -> Result<AuthConfig> {
        let config = match self {
            Site::Users => AuthConfig::users_site_from_env(),
            Site::Admin => AuthConfig::admin_site_from_env(),
        };
        config.context("Failed to load sign-in configuration")
    }
}

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Show the identity configuration and the active account
    Status {
        #[arg(long, value_enum, default_value = "users")]
        site: Site,
    },
    /// Print the sign-in URL and record a successful sign-in
    Login {
        #[arg(long, value_enum, default_value = "users")]
        site: Site,

        /// Account username (usually an email address)
        #[arg(short, long)]
        username: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Make another cached account the active one
    Switch {
        #[arg(long, value_enum, default_value = "users")]
        site: Site,

        /// Username of a previously signed-in account
        #[arg(short, long)]
        username: String,
    },
    /// Forget the active account and print the sign-out URL
    Logout {
        #[arg(long, value_enum, default_value = "users")]
        site: Site,
    },
}

/// Handle auth commands
pub fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    match command {
        AuthCommands::Status { site } => {
            let session = open_session(site, config)?;
            print_status(&session);
            Ok(())
        }
        AuthCommands::Login {
            site,
            username,
            name,
        } => login(site, config, username, name),
        AuthCommands::Switch { site, username } => switch(site, config, &username),
        AuthCommands::Logout { site } => logout(site, config),
    }
}

fn open_session(site: Site, config: &Config) -> Result<AuthSession> {
    let auth_config = site.auth_config()?;
    let cache = account_cache::load(&config.account_cache)?;
    Ok(AuthSession::initialize(auth_config, cache))
}

fn login(site: Site, config: &Config, username: String, name: Option<String>) -> Result<()> {
    let mut session = open_session(site, config)?;

    let request = session.login_request()?;
    println!("{}", "Open this URL to sign in:".bold());
    println!("  {}", request.authorize_url.as_str().cyan());
    println!("  Scopes: {}", request.scopes.join(" ").dimmed());

    let mut account = Account::new(username.to_lowercase(), username);
    if let Some(name) = name {
        account = account.with_name(name);
    }
    session.handle_event(AuthEvent::LoginSuccess { account });
    account_cache::save(&config.account_cache, &session.to_cache())?;

    if let Some(active) = session.active_account() {
        println!();
        println!(
            "{}",
            format!("✓ Signed in as {}", active.username).green().bold()
        );
    }

    Ok(())
}

fn switch(site: Site, config: &Config, username: &str) -> Result<()> {
    let mut session = open_session(site, config)?;

    if !session.set_active_account(&username.to_lowercase()) {
        anyhow::bail!(
            "No cached account for {}; run `haven auth login` first",
            username
        );
    }
    account_cache::save(&config.account_cache, &session.to_cache())?;

    println!("{}", format!("✓ Active account: {}", username).green().bold());
    Ok(())
}

fn logout(site: Site, config: &Config) -> Result<()> {
    let mut session = open_session(site, config)?;

    let request = session.logout_request()?;
    let Some(account) = request.account else {
        println!("{}", "No active account.".yellow());
        return Ok(());
    };

    session.handle_event(AuthEvent::LogoutSuccess);
    account_cache::save(&config.account_cache, &session.to_cache())?;

    println!(
        "{}",
        format!("✓ Signed out {}", account.username).green().bold()
    );
    println!("  Finish in the browser: {}", request.end_session_url.as_str().cyan());

    Ok(())
}

fn print_status(session: &AuthSession) {
    let auth = session.config();

    println!("{}", "Sign-in Configuration:".bold());
    println!("  Authority:   {}", auth.authority().cyan());
    let known = auth.known_authorities();
    if !known.is_empty() {
        println!("  Known hosts: {}", known.join(", ").dimmed());
    }
    println!("  Client ID:   {}", auth.client_id);
    println!("  Redirect:    {}", auth.redirect_uri);
    println!("  Scopes:      {}", auth.scopes.join(" "));
    println!("  Cache:       {}", auth.cache.location.to_string().dimmed());

    println!();
    match session.active_account() {
        Some(account) => {
            println!("{}", "Active account:".bold());
            println!("  {} {}", "▸".cyan(), account.username.bold());
            if let Some(name) = &account.name {
                println!("    Name:       {}", name.dimmed());
            }
            if let Some(at) = account.last_login_at {
                println!(
                    "    Last login: {}",
                    at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
                );
            }
        }
        None => println!("{}", "Not signed in.".yellow()),
    }

    let others = session.all_accounts().len().saturating_sub(1);
    if others > 0 && session.active_account().is_some() {
        println!("  ({} other cached account(s))", others.to_string().dimmed());
    }
}
