//! Supplier offer commands.

use anyhow::Result;
use clap::Subcommand;
use procura_client::BackendClient;
use procura_core::sourcing::{price_catalog, OfferSelector, QuoteEvaluation};
use procura_shared::types::RequestCode;

use crate::render::{self, Table};

/// Offer comparison commands.
#[derive(Subcommand)]
pub enum OffersCommands {
    /// Compare every supplier quote for a request
    Compare {
        /// Request code
        code: RequestCode,
    },

    /// Show the most favorable quote for a request
    Best {
        /// Request code
        code: RequestCode,
    },

    /// Look up historical offers for an article, converted to EUR
    Cheapest {
        /// Article name to match
        #[arg(long)]
        name: String,

        /// Article description to match
        #[arg(long, default_value = "")]
        description: String,
    },
}

impl OffersCommands {
    /// Dispatches the offers subcommand.
    pub async fn execute(self, client: &BackendClient) -> Result<()> {
        match self {
            Self::Compare { code } => compare(client, &code).await,
            Self::Best { code } => best(client, &code).await,
            Self::Cheapest { name, description } => cheapest(client, &name, &description).await,
        }
    }
}

async fn compare(client: &BackendClient, code: &RequestCode) -> Result<()> {
    let articles = client.fetch_articles(code).await?;
    let quotes = client.fetch_quotes(code).await?;

    if quotes.is_empty() {
        println!("No supplier quotes recorded for {code}.");
        return Ok(());
    }
    let rates = client.fetch_rates().await?;

    // One row per requested article, one price column per supplier.
    let mut headers = vec!["Article".to_string(), "Qty".to_string()];
    headers.extend(quotes.iter().map(|quote| quote.supplier_name.clone()));
    let mut grid = Table::new(headers);
    for article in &articles {
        let mut cells = vec![article.name.clone(), render::amount(article.quantity)];
        for quote in &quotes {
            let cell = quote.offer_for(article.id).map_or_else(String::new, |offer| {
                format!("{} {}", render::amount(offer.unit_price), offer.currency)
            });
            cells.push(cell);
        }
        grid.row(cells);
    }

    let evaluations = OfferSelector::evaluate_all(&quotes, &articles, &rates);
    let best = OfferSelector::select_best(&quotes, &articles, &rates);

    println!("Offers - {code}");
    println!();
    print!("{grid}");
    println!();
    print!("{}", evaluation_table(&evaluations, best.as_ref()));
    Ok(())
}

async fn best(client: &BackendClient, code: &RequestCode) -> Result<()> {
    let articles = client.fetch_articles(code).await?;
    let quotes = client.fetch_quotes(code).await?;
    let rates = client.fetch_rates().await?;

    let Some(best) = OfferSelector::select_best(&quotes, &articles, &rates) else {
        println!("No supplier quotes recorded for {code}.");
        return Ok(());
    };

    println!("Best offer - {code}");
    println!();
    println!("Supplier:   {}", best.supplier_name);
    println!("Items:      {} of {}", best.items_quoted, articles.len());
    println!("Complete:   {}", yes_no(best.has_all_items));
    println!(
        "Total:      {} {}",
        render::amount(best.total_original),
        best.currency
    );
    println!("Total EUR:  {}", render::euros(best.total_eur));
    if best.total_eur.is_zero() {
        println!();
        println!("Note: the quotes on file carry no prices yet.");
    }
    Ok(())
}

async fn cheapest(client: &BackendClient, name: &str, description: &str) -> Result<()> {
    let offers = client.cheapest_offers(name, description).await?;
    if offers.is_empty() {
        println!("No historical offers match \"{name}\".");
        return Ok(());
    }
    let rates = client.fetch_rates().await?;

    let mut table = Table::new(["Supplier", "Unit price EUR"]);
    for offer in price_catalog(offers, &rates) {
        table.row([offer.supplier_name, render::euros(offer.price_eur)]);
    }
    print!("{table}");
    Ok(())
}

fn evaluation_table(evaluations: &[QuoteEvaluation], best: Option<&QuoteEvaluation>) -> Table {
    let mut table = Table::new(["Supplier", "Items", "Complete", "Total", "Total EUR", "Best"]);
    for evaluation in evaluations {
        let is_best = best.is_some_and(|b| b.supplier_id == evaluation.supplier_id);
        table.row([
            evaluation.supplier_name.clone(),
            evaluation.items_quoted.to_string(),
            yes_no(evaluation.has_all_items).to_string(),
            format!(
                "{} {}",
                render::amount(evaluation.total_original),
                evaluation.currency
            ),
            render::euros(evaluation.total_eur),
            if is_best { "*".to_string() } else { String::new() },
        ]);
    }
    table
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
