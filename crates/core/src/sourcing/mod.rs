//! Supplier sourcing: quote evaluation and best-offer selection.
//!
//! A purchase request carries a list of requested [`Article`]s. Each
//! consulted supplier answers with a [`SupplierQuote`] holding per-article
//! [`Offer`] lines. The [`OfferSelector`] ranks quotes in EUR and picks
//! the most favorable one. The [`catalog`] module covers the historical
//! cheapest-offers lookup used when drafting a new request.

pub mod catalog;
pub mod selector;
pub mod types;

#[cfg(test)]
mod selector_props;

pub use catalog::{price_catalog, CatalogOffer, PricedCatalogOffer, ProductSuggestion, SuggestionKind};
pub use selector::OfferSelector;
pub use types::{Article, Offer, QuoteEvaluation, SupplierQuote};
