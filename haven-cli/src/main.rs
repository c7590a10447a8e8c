//! Talent Haven CLI
//!
//! Command-line interface for the Talent Haven job offer API and sign-in
//! configuration.

mod account_cache;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "haven")]
#[command(about = "Talent Haven job offer CLI", long_about = None)]
struct Cli {
    /// Job offer API URL
    #[arg(long, env = "HAVEN_API_URL", default_value = "http://localhost:7071")]
    api_url: String,

    /// File holding signed-in accounts between runs
    #[arg(long, env = "HAVEN_ACCOUNT_CACHE", default_value = ".haven-accounts.json")]
    account_cache: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        account_cache: cli.account_cache,
    };

    handle_command(cli.command, &config).await
}
