//! Currency settings commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use procura_client::BackendClient;
use procura_core::currency::CurrencySettings;
use rust_decimal::Decimal;

use crate::render::Table;

/// Conversion rate commands.
#[derive(Subcommand)]
pub enum RatesCommands {
    /// Show the stored EUR conversion rates
    Show,

    /// Update one or more rates, leaving the rest unchanged
    Set {
        /// EUR value of one US dollar
        #[arg(long)]
        usd: Option<Decimal>,

        /// EUR value of one Moroccan dirham
        #[arg(long)]
        mad: Option<Decimal>,

        /// EUR value of one British pound
        #[arg(long)]
        gbp: Option<Decimal>,
    },
}

impl RatesCommands {
    /// Dispatches the rates subcommand.
    pub async fn execute(self, client: &BackendClient) -> Result<()> {
        match self {
            Self::Show => show(client).await,
            Self::Set { usd, mad, gbp } => set(client, usd, mad, gbp).await,
        }
    }
}

async fn show(client: &BackendClient) -> Result<()> {
    let rates = client.fetch_rates().await?;
    print!("{}", rates_table(rates.settings()));
    Ok(())
}

async fn set(
    client: &BackendClient,
    usd: Option<Decimal>,
    mad: Option<Decimal>,
    gbp: Option<Decimal>,
) -> Result<()> {
    if usd.is_none() && mad.is_none() && gbp.is_none() {
        bail!("Nothing to update; pass at least one of --usd, --mad, --gbp");
    }

    let mut settings = client.fetch_rates().await?.settings();
    if let Some(rate) = usd {
        settings.usd_to_eur = rate;
    }
    if let Some(rate) = mad {
        settings.mad_to_eur = rate;
    }
    if let Some(rate) = gbp {
        settings.gbp_to_eur = rate;
    }

    client.update_rates(&settings).await?;
    println!("Rates updated.");
    println!();
    print!("{}", rates_table(settings));
    Ok(())
}

fn rates_table(settings: CurrencySettings) -> Table {
    let mut table = Table::new(["Currency", "1 unit in EUR"]);
    table.row(["EUR".to_string(), Decimal::ONE.to_string()]);
    table.row(["USD".to_string(), settings.usd_to_eur.to_string()]);
    table.row(["MAD".to_string(), settings.mad_to_eur.to_string()]);
    table.row(["GBP".to_string(), settings.gbp_to_eur.to_string()]);
    table
}
