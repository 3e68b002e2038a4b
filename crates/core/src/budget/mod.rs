//! Departement budget recalculation.

pub mod service;
pub mod types;


pub use service::BudgetService;
pub use types::{coerce_amount, BudgetField, BudgetSnapshot, Month, MonthlySeries};
