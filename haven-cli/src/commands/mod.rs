//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod auth;
mod offer;

pub use auth::AuthCommands;
pub use offer::OfferCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job offer management
    Offer {
        #[command(subcommand)]
        command: OfferCommands,
    },
    /// Sign-in configuration and cached accounts
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Offer { command } => offer::handle_offer_command(command, config).await,
        Commands::Auth { command } => auth::handle_auth_command(command, config),
    }
}
