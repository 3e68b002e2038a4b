//! Currency conversion into the EUR reference currency.

use procura_shared::types::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

use super::rates::RateTable;

/// Converts an amount into EUR using the table's multiplicative rate.
///
/// The result is exact and unrounded so that callers comparing totals are
/// not disturbed by rounding. Use [`round_display`] when presenting values.
#[must_use]
pub fn convert_to_eur(amount: Decimal, currency: Currency, rates: &RateTable) -> Decimal {
    amount * rates.rate(currency)
}

/// Rounds a monetary amount to 2 decimal places using banker's rounding.
#[must_use]
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
