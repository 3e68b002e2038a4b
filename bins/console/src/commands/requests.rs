//! Purchase request commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use procura_client::BackendClient;
use procura_core::workflow::RequestWorkflow;
use procura_shared::config::AppConfig;
use procura_shared::types::{PageRequest, RequestCode, UserCode};

use crate::render::{self, Table};

/// Purchase request commands.
#[derive(Subcommand)]
pub enum RequestCommands {
    /// List a user's purchase requests, one page at a time
    List {
        /// User code the listing is scoped to
        #[arg(long)]
        user: UserCode,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show one request with its articles
    Show {
        /// Request code
        code: RequestCode,
    },

    /// Show the audit trail of a request
    History {
        /// Request code
        code: RequestCode,
    },

    /// Sign off a request awaiting executive review
    Validate {
        /// Request code
        code: RequestCode,

        /// Code of the reviewing user
        #[arg(long)]
        user: UserCode,

        /// Departement of the reviewing user (COO or CFO)
        #[arg(long)]
        departement: String,
    },

    /// Reject a request awaiting executive review
    Reject {
        /// Request code
        code: RequestCode,

        /// Code of the reviewing user
        #[arg(long)]
        user: UserCode,

        /// Departement of the reviewing user (COO or CFO)
        #[arg(long)]
        departement: String,
    },
}

impl RequestCommands {
    /// Dispatches the requests subcommand.
    pub async fn execute(self, client: &BackendClient, config: &AppConfig) -> Result<()> {
        match self {
            Self::List { user, page } => list(client, config, &user, page).await,
            Self::Show { code } => show(client, &code).await,
            Self::History { code } => history(client, &code).await,
            Self::Validate {
                code,
                user,
                departement,
            } => review(client, &code, &user, &departement, true).await,
            Self::Reject {
                code,
                user,
                departement,
            } => review(client, &code, &user, &departement, false).await,
        }
    }
}

async fn list(
    client: &BackendClient,
    config: &AppConfig,
    user: &UserCode,
    page: u32,
) -> Result<()> {
    let mut request = PageRequest::page(page);
    request.page_size = config.console.page_size;

    let listing = client.list_requests(user, request).await?;
    if listing.items.is_empty() {
        println!("No requests found for {user}.");
        return Ok(());
    }

    let mut table = Table::new(["Code", "Requester", "Opened", "Status"]);
    for item in &listing.items {
        table.row([
            item.code.to_string(),
            item.requester.full_name(),
            item.opened_at.format("%Y-%m-%d").to_string(),
            item.status_label().to_string(),
        ]);
    }
    print!("{table}");
    println!();
    println!(
        "Page {} of {} ({} requests)",
        request.page_number,
        listing.total_pages(request.page_size),
        listing.total_count
    );
    Ok(())
}

async fn show(client: &BackendClient, code: &RequestCode) -> Result<()> {
    let request = client.fetch_request(code).await?;
    let articles = client.fetch_articles(code).await?;

    let status = match request.status_label() {
        "" => "unknown",
        label => label,
    };
    println!("Request {code}");
    println!("Requester:  {}", request.requester.full_name());
    println!("Opened:     {}", request.opened_at.format("%Y-%m-%d %H:%M"));
    println!("Status:     {status}");
    println!();

    if articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }
    let mut table = Table::new(["Article", "Description", "Qty", "Family", "Destination", "PO"]);
    for article in &articles {
        table.row([
            article.name.clone(),
            article.description.clone(),
            render::amount(article.quantity),
            article.famille_de_produit.clone().unwrap_or_default(),
            article.destination.clone().unwrap_or_default(),
            article.purchase_order.clone().unwrap_or_default(),
        ]);
    }
    print!("{table}");
    Ok(())
}

async fn history(client: &BackendClient, code: &RequestCode) -> Result<()> {
    let entries = client.fetch_history(code).await?;
    if entries.is_empty() {
        println!("No history recorded for {code}.");
        return Ok(());
    }

    let mut table = Table::new(["Date", "User", "Details"]);
    for entry in &entries {
        table.row([
            entry.date_changed.format("%Y-%m-%d %H:%M").to_string(),
            entry.user_code.to_string(),
            entry.details.clone(),
        ]);
    }
    print!("{table}");
    Ok(())
}

/// Validates or rejects a request after checking the reviewer is an
/// executive whose signature the request is actually waiting on.
async fn review(
    client: &BackendClient,
    code: &RequestCode,
    user: &UserCode,
    departement: &str,
    approve: bool,
) -> Result<()> {
    let request = client.fetch_request(code).await?;
    let status = request
        .status
        .context("The request carries a status this console does not know")?;
    let executive = RequestWorkflow::authorize_review(departement, status)?;

    if approve {
        client.validate_request(code, user).await?;
        match RequestWorkflow::next_after_validation(executive, status) {
            Some(next) => println!("{code} validated; status is now {}.", next.label()),
            None => println!("{code} validated."),
        }
    } else {
        client.reject_request(code, user).await?;
        println!("{code} rejected.");
    }
    Ok(())
}
