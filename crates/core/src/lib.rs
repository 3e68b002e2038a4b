//! Core business logic for Procura.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculation rules, and gating logic live here.
//!
//! # Modules
//!
//! - `budget` - Departement budget recalculation
//! - `currency` - Exchange rates and EUR conversion
//! - `sourcing` - Supplier quote evaluation and best-offer selection
//! - `workflow` - Purchase request lifecycle, roles, and gating

pub mod budget;
pub mod currency;
pub mod sourcing;
pub mod workflow;
