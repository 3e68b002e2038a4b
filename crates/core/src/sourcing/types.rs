//! Sourcing domain types: requested articles, supplier offers, quotes.

use procura_shared::types::{ArticleId, Currency, SupplierId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested line of a purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Article identifier, referenced by offer lines.
    pub id: ArticleId,
    /// Article name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Requested quantity.
    pub quantity: Decimal,
    /// Purchase order number assigned during validation, if any.
    #[serde(default)]
    pub purchase_order: Option<String>,
    /// Product family label, used by catalog searches.
    #[serde(default)]
    pub famille_de_produit: Option<String>,
    /// Delivery destination.
    #[serde(default)]
    pub destination: Option<String>,
}

/// A supplier's quoted price for one requested article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Identifier of the requested article this line answers.
    #[serde(rename = "demandeArticleId")]
    pub article_id: ArticleId,
    /// Quoted price per unit, in the supplier's currency.
    pub unit_price: Decimal,
    /// Currency the price is quoted in. Absent on the wire means EUR.
    #[serde(rename = "devise", default)]
    pub currency: Currency,
    /// Quantity the supplier can deliver.
    pub quantity: Decimal,
    /// Free-text delivery delay as entered by the supplier.
    #[serde(default)]
    pub delay: String,
}

/// The set of one supplier's offer lines for a purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierQuote {
    /// Supplier identifier.
    #[serde(rename = "id")]
    pub supplier_id: SupplierId,
    /// Supplier display name.
    #[serde(rename = "nom")]
    pub supplier_name: String,
    /// Offer lines. The per-request listing names this field `offer`,
    /// the selected-supplier endpoint names it `offers`.
    #[serde(rename = "offer", alias = "offers", default)]
    pub offers: Vec<Offer>,
}

impl SupplierQuote {
    /// The currency this supplier's lines are priced in.
    ///
    /// Taken from the first offer line; a supplier with no lines is
    /// treated as quoting in EUR.
    #[must_use]
    pub fn effective_currency(&self) -> Currency {
        self.offers.first().map_or(Currency::Eur, |offer| offer.currency)
    }

    /// Finds the line answering the given article, if quoted.
    #[must_use]
    pub fn offer_for(&self, article_id: ArticleId) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.article_id == article_id)
    }
}

/// Ranking facts computed for one supplier quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEvaluation {
    /// Supplier identifier.
    pub supplier_id: SupplierId,
    /// Supplier display name.
    pub supplier_name: String,
    /// Currency the supplier priced in (first offer line, EUR when empty).
    pub currency: Currency,
    /// Number of requested articles quoted at a non-zero unit price.
    pub items_quoted: usize,
    /// Whether every requested article is quoted at a non-zero price.
    pub has_all_items: bool,
    /// Ranking total in EUR, exact and unrounded.
    pub total_eur: Decimal,
    /// Subtotal in the supplier's own currency, for display.
    pub total_original: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn offer(article_id: i64, currency: Currency) -> Offer {
        Offer {
            article_id: ArticleId::new(article_id),
            unit_price: dec!(10),
            currency,
            quantity: dec!(1),
            delay: "2 weeks".to_string(),
        }
    }

    #[test]
    fn test_effective_currency_from_first_line() {
        let quote = SupplierQuote {
            supplier_id: SupplierId::new(1),
            supplier_name: "Acme".to_string(),
            offers: vec![offer(1, Currency::Mad), offer(2, Currency::Gbp)],
        };
        assert_eq!(quote.effective_currency(), Currency::Mad);
    }

    #[test]
    fn test_effective_currency_defaults_to_eur() {
        let quote = SupplierQuote {
            supplier_id: SupplierId::new(1),
            supplier_name: "Acme".to_string(),
            offers: Vec::new(),
        };
        assert_eq!(quote.effective_currency(), Currency::Eur);
    }

    #[test]
    fn test_offer_for() {
        let quote = SupplierQuote {
            supplier_id: SupplierId::new(1),
            supplier_name: "Acme".to_string(),
            offers: vec![offer(1, Currency::Eur), offer(2, Currency::Eur)],
        };
        assert!(quote.offer_for(ArticleId::new(2)).is_some());
        assert!(quote.offer_for(ArticleId::new(3)).is_none());
    }

    #[test]
    fn test_quote_wire_names() {
        let json = r#"{
            "id": 7,
            "nom": "Bureau Service",
            "offer": [
                {"demandeArticleId": 3, "unitPrice": 12.5, "devise": "USD", "quantity": 4, "delay": "10 days"}
            ]
        }"#;
        let quote: SupplierQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.supplier_name, "Bureau Service");
        assert_eq!(quote.offers.len(), 1);
        assert_eq!(quote.offers[0].article_id, ArticleId::new(3));
        assert_eq!(quote.offers[0].unit_price, dec!(12.5));
        assert_eq!(quote.offers[0].currency, Currency::Usd);
    }

    #[test]
    fn test_quote_accepts_plural_offers_field() {
        let json = r#"{"id": 7, "nom": "Bureau Service", "offers": []}"#;
        let quote: SupplierQuote = serde_json::from_str(json).unwrap();
        assert!(quote.offers.is_empty());
    }

    #[test]
    fn test_offer_missing_devise_defaults_to_eur() {
        let json = r#"{"demandeArticleId": 1, "unitPrice": 3, "quantity": 2}"#;
        let line: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(line.currency, Currency::Eur);
        assert!(line.delay.is_empty());
    }

    #[test]
    fn test_article_wire_names() {
        let json = r#"{
            "id": 5,
            "name": "Bolt M8",
            "description": "Stainless",
            "quantity": 200,
            "purchaseOrder": "PO-19",
            "familleDeProduit": "Fasteners",
            "destination": "Plant 2"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, ArticleId::new(5));
        assert_eq!(article.quantity, dec!(200));
        assert_eq!(article.purchase_order.as_deref(), Some("PO-19"));
        assert_eq!(article.famille_de_produit.as_deref(), Some("Fasteners"));
    }

    #[test]
    fn test_article_optional_fields_default() {
        let json = r#"{"id": 5, "name": "Bolt M8", "quantity": 200}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.description.is_empty());
        assert!(article.purchase_order.is_none());
        assert!(article.destination.is_none());
    }
}
