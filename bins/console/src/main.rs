//! Procura procurement console.
//!
//! Terminal front end for the procurement backend: departement budget
//! tables, currency settings, supplier offer comparison, and the purchase
//! request pipeline.

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use procura_client::BackendClient;
use procura_shared::config::AppConfig;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Tables go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "procura=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.backend.base_url, "Configuration loaded");
    let client = BackendClient::new(&config.backend)?;

    cli.command.execute(&client, &config).await
}
