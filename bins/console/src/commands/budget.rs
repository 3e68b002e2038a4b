//! Departement budget commands.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Subcommand;
use procura_client::BackendClient;
use procura_core::budget::{
    coerce_amount, BudgetField, BudgetService, BudgetSnapshot, Month, MonthlySeries,
};
use procura_shared::config::AppConfig;
use rust_decimal::Decimal;

use crate::render::{self, Table};

/// Budget table commands.
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the recalculated budget table of a departement
    Show {
        /// Departement to load (defaults to the configured one)
        #[arg(long)]
        departement: Option<String>,

        /// Month columns to print, January first (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        months: Option<u32>,
    },

    /// Edit one input cell, recompute, and optionally save
    Set {
        /// Departement to edit (defaults to the configured one)
        #[arg(long)]
        departement: Option<String>,

        /// Input series to edit
        #[arg(long, value_enum)]
        field: FieldArg,

        /// Calendar month to edit (1 = January)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// New value; anything non-numeric counts as zero
        #[arg(long)]
        value: String,

        /// Write the edited inputs back to the backend
        #[arg(long)]
        save: bool,
    },
}

/// Editable series argument.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum FieldArg {
    InitialBudget,
    SalesBudget,
    SalesForecast,
    Adjustment,
    BudgetIp,
}

impl From<FieldArg> for BudgetField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::InitialBudget => Self::InitialBudget,
            FieldArg::SalesBudget => Self::SalesBudget,
            FieldArg::SalesForecast => Self::SalesForecast,
            FieldArg::Adjustment => Self::Adjustment,
            FieldArg::BudgetIp => Self::BudgetIp,
        }
    }
}

impl BudgetCommands {
    /// Dispatches the budget subcommand.
    pub async fn execute(self, client: &BackendClient, config: &AppConfig) -> Result<()> {
        match self {
            Self::Show { departement, months } => {
                let departement =
                    departement.unwrap_or_else(|| config.console.departement.clone());
                show(client, &departement, month_count(months)).await
            }
            Self::Set {
                departement,
                field,
                month,
                value,
                save,
            } => {
                let departement =
                    departement.unwrap_or_else(|| config.console.departement.clone());
                set(client, &departement, field.into(), month, &value, save).await
            }
        }
    }
}

/// Month columns to print; like the budget screen, the table stops at the
/// current month unless asked otherwise.
fn month_count(months: Option<u32>) -> usize {
    months
        .and_then(|m| usize::try_from(m).ok())
        .unwrap_or_else(current_month_count)
}

fn current_month_count() -> usize {
    usize::try_from(chrono::Utc::now().month()).unwrap_or(12)
}

async fn show(client: &BackendClient, departement: &str, months: usize) -> Result<()> {
    let snapshot = client.fetch_budget(departement).await?;
    let computed = BudgetService::recalculate(&snapshot);

    println!("Budget - {departement}");
    println!();
    print!("{}", budget_table(&computed, months));
    println!();
    println!("* editable with `procura budget set`");
    Ok(())
}

async fn set(
    client: &BackendClient,
    departement: &str,
    field: BudgetField,
    month: u32,
    value: &str,
    save: bool,
) -> Result<()> {
    let month = Month::from_number(month).context("Month must be between 1 and 12")?;
    let amount = coerce_amount(value);

    let mut snapshot = client.fetch_budget(departement).await?;
    snapshot.input_mut(field).set(month, amount);
    let computed = BudgetService::recalculate(&snapshot);

    println!(
        "Budget - {departement} ({field}, {month} = {})",
        render::amount(amount)
    );
    println!();
    let months = month_count(None).max(month.index() + 1);
    print!("{}", budget_table(&computed, months));

    if save {
        client.save_budget(departement, &computed).await?;
        println!();
        println!("Saved.");
    } else {
        println!();
        println!("Not saved; rerun with --save to persist.");
    }
    Ok(())
}

enum CellKind {
    /// Editable input, shown as typed.
    Input,
    /// Derived or backend-owned amount, shown in euros.
    Money,
    /// Derived ratio, shown as a percentage.
    Percent,
}

impl CellKind {
    fn format(&self, value: Decimal) -> String {
        match self {
            Self::Input => render::amount(value),
            Self::Money => render::euros(value),
            Self::Percent => render::percent(value),
        }
    }
}

/// Renders the series rows in the order the budget screen lists them.
fn budget_table(snapshot: &BudgetSnapshot, months: usize) -> Table {
    let mut headers = vec!["Series".to_string()];
    headers.extend(
        Month::ALL
            .iter()
            .take(months)
            .map(|m| m.short_name().to_string()),
    );
    let mut table = Table::new(headers);

    let rows: [(&str, &MonthlySeries, CellKind); 11] = [
        ("Initial Budget *", &snapshot.initial_budget, CellKind::Input),
        ("Sales Budget *", &snapshot.sales_budget, CellKind::Input),
        ("Sales Forecast *", &snapshot.sales_forecast, CellKind::Input),
        ("Adjustment *", &snapshot.adjustment, CellKind::Input),
        ("Budget V2", &snapshot.budget_v2, CellKind::Money),
        ("Budget IP *", &snapshot.budget_ip, CellKind::Input),
        ("Actual", &snapshot.actual, CellKind::Money),
        ("Saving", &snapshot.saving, CellKind::Money),
        ("TO", &snapshot.to, CellKind::Money),
        ("% Of Sales", &snapshot.percent_of_sales, CellKind::Percent),
        ("% Of Purchases", &snapshot.percent_of_purchases, CellKind::Percent),
    ];

    for (label, series, kind) in rows {
        let mut cells = vec![label.to_string()];
        cells.extend(
            series
                .as_array()
                .iter()
                .take(months)
                .map(|value| kind.format(*value)),
        );
        table.row(cells);
    }
    table
}
