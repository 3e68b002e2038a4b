//! Budget data types.
//!
//! A departement budget is a set of 12-month series: five editable inputs,
//! two read-only inputs fed by the backend (`actual`, `to`), and four
//! derived series that only [`super::BudgetService::recalculate`] writes.

use rust_decimal::Decimal;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Calendar month, used to index the budget series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    /// January (index 0).
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December (index 11).
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Zero-based index into a [`MonthlySeries`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month from a zero-based index, `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Month from a 1-based calendar number (1 = January).
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::from_index(i as usize))
    }

    /// Full month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Three-letter abbreviation used in table headers.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A fixed 12-slot series of monthly amounts, January first.
///
/// The wire representation is a plain JSON array. Deserialization is
/// tolerant: missing arrays become all zeros, short arrays are padded with
/// zeros, long arrays are truncated, and `null` entries coerce to zero, so
/// a partial backend payload can never poison the computation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySeries([Decimal; 12]);

impl MonthlySeries {
    /// A series of twelve zeros.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Builds a series from up to 12 values, padding with zeros.
    #[must_use]
    pub fn from_values(values: &[Decimal]) -> Self {
        let mut slots = [Decimal::ZERO; 12];
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = *value;
        }
        Self(slots)
    }

    /// Amount for the given month.
    #[must_use]
    pub fn get(&self, month: Month) -> Decimal {
        self.0[month.index()]
    }

    /// Replaces the amount for the given month.
    pub fn set(&mut self, month: Month, value: Decimal) {
        self.0[month.index()] = value;
    }

    /// Iterates months with their amounts, January first.
    pub fn iter(&self) -> impl Iterator<Item = (Month, Decimal)> + '_ {
        Month::ALL.iter().map(|&m| (m, self.get(m)))
    }

    /// The underlying 12 amounts.
    #[must_use]
    pub fn as_array(&self) -> &[Decimal; 12] {
        &self.0
    }

    /// Returns true when every slot is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Decimal::is_zero)
    }
}

impl From<[Decimal; 12]> for MonthlySeries {
    fn from(values: [Decimal; 12]) -> Self {
        Self(values)
    }
}

impl Serialize for MonthlySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonthlySeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<Decimal>>::deserialize(deserializer)?;
        let values: Vec<Decimal> = values.into_iter().map(Option::unwrap_or_default).collect();
        Ok(Self::from_values(&values))
    }
}

/// All monthly series of one departement budget.
///
/// The derived series (`budget_v2`, `saving`, `percent_of_sales`,
/// `percent_of_purchases`) are never edited directly; recalculation
/// replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    /// Initial budget allocation (editable input).
    #[serde(default)]
    pub initial_budget: MonthlySeries,
    /// Budgeted sales (editable input).
    #[serde(default)]
    pub sales_budget: MonthlySeries,
    /// Forecast sales (editable input).
    #[serde(default)]
    pub sales_forecast: MonthlySeries,
    /// Adjustment percentage (editable input, unclamped).
    #[serde(default)]
    pub adjustment: MonthlySeries,
    /// IP budget (editable input, carried but not used in derivations).
    #[serde(default, rename = "budgetIP")]
    pub budget_ip: MonthlySeries,
    /// Actual purchases booked so far (read-only input).
    #[serde(default)]
    pub actual: MonthlySeries,
    /// Turnover (read-only input).
    #[serde(default)]
    pub to: MonthlySeries,
    /// Recalculated budget (derived).
    #[serde(default)]
    pub budget_v2: MonthlySeries,
    /// Budget V2 minus actual (derived).
    #[serde(default)]
    pub saving: MonthlySeries,
    /// Turnover share of forecast sales, in percent (derived).
    #[serde(default)]
    pub percent_of_sales: MonthlySeries,
    /// Actual share of budget V2, in percent (derived).
    #[serde(default)]
    pub percent_of_purchases: MonthlySeries,
}

impl BudgetSnapshot {
    /// Borrow of the editable series behind a field selector.
    #[must_use]
    pub fn input(&self, field: BudgetField) -> &MonthlySeries {
        match field {
            BudgetField::InitialBudget => &self.initial_budget,
            BudgetField::SalesBudget => &self.sales_budget,
            BudgetField::SalesForecast => &self.sales_forecast,
            BudgetField::Adjustment => &self.adjustment,
            BudgetField::BudgetIp => &self.budget_ip,
        }
    }

    /// Mutable borrow of the editable series behind a field selector.
    pub fn input_mut(&mut self, field: BudgetField) -> &mut MonthlySeries {
        match field {
            BudgetField::InitialBudget => &mut self.initial_budget,
            BudgetField::SalesBudget => &mut self.sales_budget,
            BudgetField::SalesForecast => &mut self.sales_forecast,
            BudgetField::Adjustment => &mut self.adjustment,
            BudgetField::BudgetIp => &mut self.budget_ip,
        }
    }
}

/// The editable input series of a budget.
///
/// `actual` and `to` come from the backend and the derived series come from
/// recalculation, so neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetField {
    /// `initialBudget`
    InitialBudget,
    /// `salesBudget`
    SalesBudget,
    /// `salesForecast`
    SalesForecast,
    /// `adjustment`
    Adjustment,
    /// `budgetIP`
    BudgetIp,
}

impl BudgetField {
    /// All editable fields, in table order.
    pub const ALL: [Self; 5] = [
        Self::InitialBudget,
        Self::SalesBudget,
        Self::SalesForecast,
        Self::Adjustment,
        Self::BudgetIp,
    ];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitialBudget => "initialBudget",
            Self::SalesBudget => "salesBudget",
            Self::SalesForecast => "salesForecast",
            Self::Adjustment => "adjustment",
            Self::BudgetIp => "budgetIP",
        }
    }

    /// Parses a field selector, accepting camelCase, kebab-case, and
    /// snake_case spellings.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "initialbudget" => Some(Self::InitialBudget),
            "salesbudget" => Some(Self::SalesBudget),
            "salesforecast" => Some(Self::SalesForecast),
            "adjustment" => Some(Self::Adjustment),
            "budgetip" => Some(Self::BudgetIp),
            _ => None,
        }
    }
}

impl std::fmt::Display for BudgetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coerces user-typed input to an amount; anything non-numeric becomes zero.
#[must_use]
pub fn coerce_amount(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_month_indexing() {
        assert_eq!(Month::January.index(), 0);
        assert_eq!(Month::December.index(), 11);
        assert_eq!(Month::from_index(3), Some(Month::April));
        assert_eq!(Month::from_index(12), None);
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_series_get_set() {
        let mut series = MonthlySeries::zeros();
        assert!(series.is_zero());

        series.set(Month::March, dec!(150.5));
        assert_eq!(series.get(Month::March), dec!(150.5));
        assert_eq!(series.get(Month::April), Decimal::ZERO);
        assert!(!series.is_zero());
    }

    #[test]
    fn test_series_from_short_slice_pads() {
        let series = MonthlySeries::from_values(&[dec!(1), dec!(2)]);
        assert_eq!(series.get(Month::January), dec!(1));
        assert_eq!(series.get(Month::February), dec!(2));
        assert_eq!(series.get(Month::March), Decimal::ZERO);
    }

    #[test]
    fn test_series_deserialize_tolerates_holes() {
        let series: MonthlySeries = serde_json::from_str("[1, null, 3]").unwrap();
        assert_eq!(series.get(Month::January), dec!(1));
        assert_eq!(series.get(Month::February), Decimal::ZERO);
        assert_eq!(series.get(Month::March), dec!(3));
        assert_eq!(series.get(Month::December), Decimal::ZERO);
    }

    #[test]
    fn test_series_deserialize_truncates_long_arrays() {
        let series: MonthlySeries =
            serde_json::from_str("[1,2,3,4,5,6,7,8,9,10,11,12,13,14]").unwrap();
        assert_eq!(series.get(Month::December), dec!(12));
    }

    #[test]
    fn test_series_serializes_as_plain_array() {
        let mut series = MonthlySeries::zeros();
        series.set(Month::January, dec!(7));
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[\"7\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\",\"0\"]");
    }

    #[test]
    fn test_snapshot_wire_names() {
        let json = r#"{"initialBudget":[100],"salesBudget":[50],"budgetIP":[9]}"#;
        let snapshot: BudgetSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.initial_budget.get(Month::January), dec!(100));
        assert_eq!(snapshot.sales_budget.get(Month::January), dec!(50));
        assert_eq!(snapshot.budget_ip.get(Month::January), dec!(9));
        assert!(snapshot.sales_forecast.is_zero());
        assert!(snapshot.budget_v2.is_zero());
    }

    #[test]
    fn test_budget_field_parse() {
        assert_eq!(BudgetField::parse("initialBudget"), Some(BudgetField::InitialBudget));
        assert_eq!(BudgetField::parse("initial-budget"), Some(BudgetField::InitialBudget));
        assert_eq!(BudgetField::parse("sales_forecast"), Some(BudgetField::SalesForecast));
        assert_eq!(BudgetField::parse("budgetIP"), Some(BudgetField::BudgetIp));
        assert_eq!(BudgetField::parse("saving"), None);
        assert_eq!(BudgetField::parse("actual"), None);
    }

    #[test]
    fn test_input_selectors() {
        let mut snapshot = BudgetSnapshot::default();
        snapshot
            .input_mut(BudgetField::Adjustment)
            .set(Month::June, dec!(15));
        assert_eq!(snapshot.adjustment.get(Month::June), dec!(15));
        assert_eq!(
            snapshot.input(BudgetField::Adjustment).get(Month::June),
            dec!(15)
        );
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("12.5"), dec!(12.5));
        assert_eq!(coerce_amount(" 42 "), dec!(42));
        assert_eq!(coerce_amount("-3"), dec!(-3));
        assert_eq!(coerce_amount("abc"), Decimal::ZERO);
        assert_eq!(coerce_amount(""), Decimal::ZERO);
        assert_eq!(coerce_amount("12,5"), Decimal::ZERO);
    }
}
