//! Best-offer selection across supplier quotes.

use rust_decimal::Decimal;

use crate::currency::{convert_to_eur, RateTable};

use super::types::{Article, QuoteEvaluation, SupplierQuote};

/// Service for ranking supplier quotes against the requested articles.
pub struct OfferSelector;

impl OfferSelector {
    /// Computes the ranking facts for one quote.
    ///
    /// An article the supplier did not quote, or quoted at price 0, does
    /// not count toward `items_quoted` but still contributes 0 to the
    /// totals. Each requested quantity is multiplied by the quoted unit
    /// price; the EUR total applies the supplier's effective currency
    /// rate and stays unrounded so ranking is not disturbed.
    #[must_use]
    pub fn evaluate(
        quote: &SupplierQuote,
        articles: &[Article],
        rates: &RateTable,
    ) -> QuoteEvaluation {
        let currency = quote.effective_currency();
        let mut items_quoted = 0usize;
        let mut total_original = Decimal::ZERO;

        for article in articles {
            let unit_price = quote
                .offer_for(article.id)
                .map_or(Decimal::ZERO, |offer| offer.unit_price);
            if !unit_price.is_zero() {
                items_quoted += 1;
            }
            total_original += article.quantity * unit_price;
        }

        QuoteEvaluation {
            supplier_id: quote.supplier_id,
            supplier_name: quote.supplier_name.clone(),
            currency,
            items_quoted,
            has_all_items: items_quoted == articles.len(),
            total_eur: convert_to_eur(total_original, currency, rates),
            total_original,
        }
    }

    /// Evaluates every quote, keeping input order.
    #[must_use]
    pub fn evaluate_all(
        quotes: &[SupplierQuote],
        articles: &[Article],
        rates: &RateTable,
    ) -> Vec<QuoteEvaluation> {
        quotes
            .iter()
            .map(|quote| Self::evaluate(quote, articles, rates))
            .collect()
    }

    /// Picks the most favorable quote in a single left-to-right scan.
    ///
    /// The first quote becomes the running best unconditionally, so a lone
    /// supplier with all-zero pricing is still returned; callers must
    /// tolerate a best with a zero total. Replacement needs strict
    /// improvement, so earlier quotes win ties.
    #[must_use]
    pub fn select_best(
        quotes: &[SupplierQuote],
        articles: &[Article],
        rates: &RateTable,
    ) -> Option<QuoteEvaluation> {
        let mut best: Option<QuoteEvaluation> = None;
        for quote in quotes {
            let candidate = Self::evaluate(quote, articles, rates);
            match best.as_ref() {
                None => best = Some(candidate),
                Some(current) if Self::replaces(&candidate, current) => best = Some(candidate),
                Some(_) => {}
            }
        }
        best
    }

    /// Whether `candidate` displaces `current`.
    ///
    /// A zero-total candidate never displaces anything. Otherwise it wins
    /// with strictly more items quoted, with completeness at an equal item
    /// count, or with a strictly lower EUR total at an equal item count
    /// and equal completeness.
    fn replaces(candidate: &QuoteEvaluation, current: &QuoteEvaluation) -> bool {
        if candidate.total_eur.is_zero() {
            return false;
        }
        if candidate.items_quoted != current.items_quoted {
            return candidate.items_quoted > current.items_quoted;
        }
        if candidate.has_all_items != current.has_all_items {
            return candidate.has_all_items;
        }
        candidate.total_eur < current.total_eur
    }
}
