//! Catalog lookups: historical cheapest offers and product suggestions.

use procura_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{convert_to_eur, round_display, RateTable};

/// One historical offer returned by the cheapest-offers search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOffer {
    /// Supplier display name.
    pub supplier_name: String,
    /// Historical unit price, in the offer's own currency.
    pub unit_price: Decimal,
    /// Currency the price was quoted in. Absent on the wire means EUR.
    #[serde(rename = "devise", default)]
    pub currency: Currency,
}

/// A catalog offer priced in EUR for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCatalogOffer {
    /// Supplier display name.
    pub supplier_name: String,
    /// Unit price converted to EUR, rounded to 2 decimal places.
    pub price_eur: Decimal,
}

/// Prices catalog offers in EUR, keeping the backend's cheapest-first order.
#[must_use]
pub fn price_catalog(offers: Vec<CatalogOffer>, rates: &RateTable) -> Vec<PricedCatalogOffer> {
    offers
        .into_iter()
        .map(|offer| {
            let price_eur = round_display(convert_to_eur(offer.unit_price, offer.currency, rates));
            PricedCatalogOffer {
                supplier_name: offer.supplier_name,
                price_eur,
            }
        })
        .collect()
}

/// A name and description pair suggested by the article autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSuggestion {
    /// Suggested article name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Suggested description.
    #[serde(default)]
    pub description: String,
}

/// Which article field a suggestion query searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Search by article name.
    Article,
    /// Search by article description.
    Description,
}

impl SuggestionKind {
    /// Wire value for the suggestion endpoint's `type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Description => "description",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
