//! Command-line surface of the console.

use anyhow::Result;
use clap::{Parser, Subcommand};
use procura_client::BackendClient;
use procura_shared::config::AppConfig;

use crate::commands::{BudgetCommands, OffersCommands, RatesCommands, RequestCommands};

/// Procurement console: departement budgets, supplier offers, and the
/// purchase request pipeline.
#[derive(Parser)]
#[command(name = "procura")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
pub enum Commands {
    /// Departement budget table and edits
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Currency conversion rates
    #[command(subcommand)]
    Rates(RatesCommands),

    /// Supplier offers for a purchase request
    #[command(subcommand)]
    Offers(OffersCommands),

    /// Purchase requests and their review
    #[command(subcommand)]
    Requests(RequestCommands),
}

impl Commands {
    /// Runs the selected command against the configured backend.
    pub async fn execute(self, client: &BackendClient, config: &AppConfig) -> Result<()> {
        match self {
            Self::Budget(cmd) => cmd.execute(client, config).await,
            Self::Rates(cmd) => cmd.execute(client).await,
            Self::Offers(cmd) => cmd.execute(client).await,
            Self::Requests(cmd) => cmd.execute(client, config).await,
        }
    }
}
