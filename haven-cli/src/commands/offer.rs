//! Job offer command handlers
//!
//! Handles creating, viewing, updating and deleting job offers.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use haven_client::HavenClient;
use haven_core::domain::job_offer::{JobOffer, OfferId};
use haven_core::dto::job_offer::JobOfferPayload;

use crate::config::Config;

/// Job offer subcommands
#[derive(Subcommand)]
pub enum OfferCommands {
    /// Create a job offer
    Create {
        /// What the job involves
        #[arg(short, long)]
        description: String,

        /// Job title (at most 100 characters)
        #[arg(short, long)]
        position: String,
    },
    /// Get job offer details
    Get {
        /// Job offer ID
        id: String,
    },
    /// Update fields of a job offer
    #[command(group(
        clap::ArgGroup::new("fields")
            .required(true)
            .multiple(true)
            .args(["description", "position"])
    ))]
    Update {
        /// Job offer ID
        id: String,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New job title
        #[arg(short, long)]
        position: Option<String>,
    },
    /// Delete a job offer
    Delete {
        /// Job offer ID
        id: String,
    },
}

/// Handle job offer commands
pub async fn handle_offer_command(command: OfferCommands, config: &Config) -> Result<()> {
    let client = HavenClient::new(&config.api_url);

    match command {
        OfferCommands::Create {
            description,
            position,
        } => create_offer(&client, JobOfferPayload::new(description, position)).await,
        OfferCommands::Get { id } => get_offer(&client, &OfferId::new(id)).await,
        OfferCommands::Update {
            id,
            description,
            position,
        } => {
            let payload = JobOfferPayload {
                description,
                position,
            };
            update_offer(&client, &OfferId::new(id), payload).await
        }
        OfferCommands::Delete { id } => delete_offer(&client, &OfferId::new(id)).await,
    }
}

async fn create_offer(client: &HavenClient, payload: JobOfferPayload) -> Result<()> {
    let created = client.create_job_offer(&payload).await?;

    println!("{}", format!("✓ {}", created.message).green().bold());
    println!("  ID: {}", created.id.to_string().cyan());

    Ok(())
}

async fn get_offer(client: &HavenClient, id: &OfferId) -> Result<()> {
    let offer = client.get_job_offer(id).await?;
    print_offer_details(&offer);
    Ok(())
}

async fn update_offer(client: &HavenClient, id: &OfferId, payload: JobOfferPayload) -> Result<()> {
    if payload.is_empty() {
        anyhow::bail!("Nothing to update: pass --description and/or --position");
    }

    let response = client.update_job_offer(id, &payload).await?;
    println!("{}", format!("✓ {}", response.message).green().bold());

    // Show the stored result
    let offer = client.get_job_offer(id).await?;
    println!();
    print_offer_details(&offer);

    Ok(())
}

async fn delete_offer(client: &HavenClient, id: &OfferId) -> Result<()> {
    let response = client.delete_job_offer(id).await?;
    println!(
        "{}",
        format!("✓ {} ({})", response.message, id).green().bold()
    );
    Ok(())
}

/// Print detailed job offer information
fn print_offer_details(offer: &JobOffer) {
    println!("{}", "Job Offer Details:".bold());
    println!("  ID:          {}", offer.id.to_string().cyan());
    println!("  Position:    {}", offer.position.bold());
    println!("\n{}", "Description:".bold());
    println!("{}", "─".repeat(80).dimmed());
    println!("{}", offer.description);
    println!("{}", "─".repeat(80).dimmed());
}
