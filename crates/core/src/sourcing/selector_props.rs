//! Property-based tests for the offer selector.

use proptest::prelude::*;
use procura_shared::types::{ArticleId, Currency, SupplierId};
use rust_decimal::Decimal;

use crate::currency::RateTable;

use super::selector::OfferSelector;
use super::types::{Article, Offer, SupplierQuote};

/// Non-zero unit prices in cents, up to one thousand units.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..100).prop_map(Decimal::from)
}

fn articles(count: usize) -> impl Strategy<Value = Vec<Article>> {
    proptest::collection::vec(quantity(), count).prop_map(|quantities| {
        quantities
            .into_iter()
            .enumerate()
            .map(|(index, quantity)| Article {
                id: ArticleId::new(i64::try_from(index).unwrap() + 1),
                name: format!("Article {}", index + 1),
                description: String::new(),
                quantity,
                purchase_order: None,
                famille_de_produit: None,
                destination: None,
            })
            .collect()
    })
}

/// Quotes that price every requested article at a non-zero unit price.
fn complete_quotes(
    article_count: usize,
    quote_count: usize,
    currency: Currency,
) -> impl Strategy<Value = Vec<SupplierQuote>> {
    proptest::collection::vec(
        proptest::collection::vec(price(), article_count),
        quote_count,
    )
    .prop_map(move |per_quote_prices| {
        per_quote_prices
            .into_iter()
            .enumerate()
            .map(|(quote_index, prices)| SupplierQuote {
                supplier_id: SupplierId::new(i64::try_from(quote_index).unwrap() + 1),
                supplier_name: format!("Supplier {}", quote_index + 1),
                offers: prices
                    .into_iter()
                    .enumerate()
                    .map(|(article_index, unit_price)| Offer {
                        article_id: ArticleId::new(i64::try_from(article_index).unwrap() + 1),
                        unit_price,
                        currency,
                        quantity: Decimal::ONE,
                        delay: String::new(),
                    })
                    .collect(),
            })
            .collect()
    })
}

fn scenario(currency: Currency) -> impl Strategy<Value = (Vec<Article>, Vec<SupplierQuote>)> {
    (1usize..4, 1usize..5).prop_flat_map(move |(article_count, quote_count)| {
        (
            articles(article_count),
            complete_quotes(article_count, quote_count, currency),
        )
    })
}

fn rates() -> RateTable {
    RateTable::new(Decimal::new(9, 1), Decimal::new(9, 2), Decimal::new(115, 2))
}

proptest! {
    /// With every quote complete and non-zero, selection degenerates to
    /// the lowest EUR total, first seen.
    #[test]
    fn test_best_is_minimal_among_complete_quotes(
        (articles, quotes) in scenario(Currency::Eur),
    ) {
        let evaluations = OfferSelector::evaluate_all(&quotes, &articles, &rates());
        let best = OfferSelector::select_best(&quotes, &articles, &rates()).unwrap();

        let minimum = evaluations.iter().map(|e| e.total_eur).min().unwrap();
        prop_assert_eq!(best.total_eur, minimum);

        let winner_index = evaluations
            .iter()
            .position(|e| e.supplier_id == best.supplier_id)
            .unwrap();
        for earlier in &evaluations[..winner_index] {
            prop_assert!(earlier.total_eur > best.total_eur);
        }
    }

    /// The selected quote always carries the facts `evaluate` computes
    /// for it.
    #[test]
    fn test_best_matches_its_evaluation(
        (articles, quotes) in scenario(Currency::Eur),
    ) {
        let best = OfferSelector::select_best(&quotes, &articles, &rates()).unwrap();
        let evaluations = OfferSelector::evaluate_all(&quotes, &articles, &rates());
        prop_assert!(evaluations.contains(&best));
    }

    /// A supplier with no offer lines never changes the outcome.
    #[test]
    fn test_empty_quote_never_displaces(
        (articles, quotes) in scenario(Currency::Eur),
    ) {
        let baseline = OfferSelector::select_best(&quotes, &articles, &rates()).unwrap();

        let mut with_empty = quotes.clone();
        with_empty.push(SupplierQuote {
            supplier_id: SupplierId::new(999),
            supplier_name: "Empty".to_string(),
            offers: Vec::new(),
        });

        let best = OfferSelector::select_best(&with_empty, &articles, &rates()).unwrap();
        prop_assert_eq!(best, baseline);
    }

    /// Scaling a single shared rate rescales totals without reordering
    /// candidates, so the winner is rate-independent.
    #[test]
    fn test_winner_invariant_under_usd_rate(
        (articles, quotes) in scenario(Currency::Usd),
        rate_cents in 1i64..500,
    ) {
        let reference = RateTable::new(Decimal::ONE, Decimal::ONE, Decimal::ONE);
        let scaled = RateTable::new(Decimal::new(rate_cents, 2), Decimal::ONE, Decimal::ONE);

        let best_reference = OfferSelector::select_best(&quotes, &articles, &reference).unwrap();
        let best_scaled = OfferSelector::select_best(&quotes, &articles, &scaled).unwrap();
        prop_assert_eq!(best_reference.supplier_id, best_scaled.supplier_id);
    }

    /// The EUR total is the original-currency subtotal times the rate.
    #[test]
    fn test_total_eur_scales_linearly(
        (articles, quotes) in scenario(Currency::Usd),
        rate_cents in 1i64..500,
    ) {
        let rate = Decimal::new(rate_cents, 2);
        let scaled = RateTable::new(rate, Decimal::ONE, Decimal::ONE);

        for evaluation in OfferSelector::evaluate_all(&quotes, &articles, &scaled) {
            prop_assert_eq!(evaluation.total_eur, evaluation.total_original * rate);
        }
    }
}
