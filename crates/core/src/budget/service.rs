//! Budget recalculation service.

use rust_decimal::Decimal;

use super::types::{BudgetSnapshot, Month};

/// Stateless service deriving the computed budget series.
pub struct BudgetService;

impl BudgetService {
    /// Recomputes the four derived series from the inputs.
    ///
    /// Per month:
    /// - `budget_v2 = initial_budget * (sales_forecast / sales_budget) * (1 - adjustment / 100)`,
    ///   forced to zero when `sales_budget` or `sales_forecast` is zero
    /// - `saving = budget_v2 - actual`
    /// - `percent_of_purchases = actual / budget_v2 * 100`, zero when `budget_v2` is zero
    /// - `percent_of_sales = to / sales_forecast * 100`, zero when `sales_forecast` is zero
    ///
    /// The function is total and idempotent: inputs pass through untouched,
    /// every derived slot is overwritten, and the derived series never feed
    /// back into the computation. The adjustment percentage is applied as-is,
    /// so values below 0 or above 100 scale accordingly.
    #[must_use]
    pub fn recalculate(snapshot: &BudgetSnapshot) -> BudgetSnapshot {
        let mut result = snapshot.clone();

        for month in Month::ALL {
            let initial = snapshot.initial_budget.get(month);
            let sales_budget = snapshot.sales_budget.get(month);
            let sales_forecast = snapshot.sales_forecast.get(month);
            let adjustment = snapshot.adjustment.get(month);
            let actual = snapshot.actual.get(month);
            let to = snapshot.to.get(month);

            let budget_v2 = if sales_budget.is_zero() || sales_forecast.is_zero() {
                Decimal::ZERO
            } else {
                initial
                    * (sales_forecast / sales_budget)
                    * (Decimal::ONE - adjustment / Decimal::ONE_HUNDRED)
            };

            let saving = budget_v2 - actual;

            let percent_of_purchases = if budget_v2.is_zero() {
                Decimal::ZERO
            } else {
                actual / budget_v2 * Decimal::ONE_HUNDRED
            };

            let percent_of_sales = if sales_forecast.is_zero() {
                Decimal::ZERO
            } else {
                to / sales_forecast * Decimal::ONE_HUNDRED
            };

            result.budget_v2.set(month, budget_v2);
            result.saving.set(month, saving);
            result.percent_of_purchases.set(month, percent_of_purchases);
            result.percent_of_sales.set(month, percent_of_sales);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot_with_january(
        initial: Decimal,
        sales_budget: Decimal,
        sales_forecast: Decimal,
        adjustment: Decimal,
        actual: Decimal,
        to: Decimal,
    ) -> BudgetSnapshot {
        let mut snapshot = BudgetSnapshot::default();
        snapshot.initial_budget.set(Month::January, initial);
        snapshot.sales_budget.set(Month::January, sales_budget);
        snapshot.sales_forecast.set(Month::January, sales_forecast);
        snapshot.adjustment.set(Month::January, adjustment);
        snapshot.actual.set(Month::January, actual);
        snapshot.to.set(Month::January, to);
        snapshot
    }

    #[test]
    fn test_worked_example() {
        let snapshot = snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(600),
            dec!(10),
            dec!(1000),
            dec!(0),
        );

        let result = BudgetService::recalculate(&snapshot);

        // 1000 * (600/500) * (1 - 10/100) = 1080
        assert_eq!(result.budget_v2.get(Month::January), dec!(1080.0));
        assert_eq!(result.saving.get(Month::January), dec!(80.0));
        assert_eq!(
            result.percent_of_purchases.get(Month::January).round_dp(2),
            dec!(92.59)
        );
    }

    #[test]
    fn test_zero_sales_budget_zeroes_budget_v2() {
        let snapshot = snapshot_with_january(
            dec!(1000),
            dec!(0),
            dec!(600),
            dec!(10),
            dec!(250),
            dec!(0),
        );

        let result = BudgetService::recalculate(&snapshot);

        assert_eq!(result.budget_v2.get(Month::January), Decimal::ZERO);
        assert_eq!(result.saving.get(Month::January), dec!(-250));
        assert_eq!(result.percent_of_purchases.get(Month::January), Decimal::ZERO);
    }

    #[test]
    fn test_zero_sales_forecast_zeroes_budget_v2_and_percent_of_sales() {
        let snapshot = snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(0),
            dec!(10),
            dec!(0),
            dec!(300),
        );

        let result = BudgetService::recalculate(&snapshot);

        assert_eq!(result.budget_v2.get(Month::January), Decimal::ZERO);
        assert_eq!(result.percent_of_sales.get(Month::January), Decimal::ZERO);
    }

    #[test]
    fn test_percent_of_sales_uses_turnover() {
        let snapshot = snapshot_with_january(
            dec!(0),
            dec!(0),
            dec!(400),
            dec!(0),
            dec!(9999),
            dec!(100),
        );

        let result = BudgetService::recalculate(&snapshot);

        // 100 / 400 * 100 = 25, regardless of actual
        assert_eq!(result.percent_of_sales.get(Month::January), dec!(25));
    }

    #[test]
    fn test_full_adjustment_zeroes_budget_v2() {
        let snapshot = snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(600),
            dec!(100),
            dec!(50),
            dec!(0),
        );

        let result = BudgetService::recalculate(&snapshot);

        assert_eq!(result.budget_v2.get(Month::January), dec!(0.0));
        assert_eq!(result.percent_of_purchases.get(Month::January), Decimal::ZERO);
    }

    #[test]
    fn test_adjustment_is_not_clamped() {
        let negative = BudgetService::recalculate(&snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(500),
            dec!(-50),
            dec!(0),
            dec!(0),
        ));
        // 1000 * 1 * (1 - (-50)/100) = 1500
        assert_eq!(negative.budget_v2.get(Month::January), dec!(1500.0));

        let above_hundred = BudgetService::recalculate(&snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(500),
            dec!(150),
            dec!(0),
            dec!(0),
        ));
        // 1000 * 1 * (1 - 150/100) = -500
        assert_eq!(above_hundred.budget_v2.get(Month::January), dec!(-500.0));
    }

    #[test]
    fn test_all_zero_snapshot_stays_zero() {
        let result = BudgetService::recalculate(&BudgetSnapshot::default());

        assert!(result.budget_v2.is_zero());
        assert!(result.saving.is_zero());
        assert!(result.percent_of_sales.is_zero());
        assert!(result.percent_of_purchases.is_zero());
    }

    #[test]
    fn test_inputs_pass_through_untouched() {
        let snapshot = snapshot_with_january(
            dec!(1000),
            dec!(500),
            dec!(600),
            dec!(10),
            dec!(1000),
            dec!(200),
        );

        let result = BudgetService::recalculate(&snapshot);

        assert_eq!(result.initial_budget, snapshot.initial_budget);
        assert_eq!(result.sales_budget, snapshot.sales_budget);
        assert_eq!(result.sales_forecast, snapshot.sales_forecast);
        assert_eq!(result.adjustment, snapshot.adjustment);
        assert_eq!(result.budget_ip, snapshot.budget_ip);
        assert_eq!(result.actual, snapshot.actual);
        assert_eq!(result.to, snapshot.to);
    }

    #[test]
    fn test_stale_derived_values_are_overwritten() {
        let mut snapshot = BudgetSnapshot::default();
        snapshot.budget_v2.set(Month::May, dec!(123));
        snapshot.saving.set(Month::May, dec!(45));
        snapshot.percent_of_sales.set(Month::May, dec!(6));
        snapshot.percent_of_purchases.set(Month::May, dec!(7));

        let result = BudgetService::recalculate(&snapshot);

        assert!(result.budget_v2.is_zero());
        assert!(result.saving.is_zero());
        assert!(result.percent_of_sales.is_zero());
        assert!(result.percent_of_purchases.is_zero());
    }
}
