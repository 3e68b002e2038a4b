//! Exchange rate table.

use procura_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Editable exchange rates as stored by the backend settings endpoint.
///
/// Each rate is multiplicative toward EUR: an amount in the source currency
/// times the rate gives euros. EUR itself never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySettings {
    /// 1 USD in EUR.
    pub usd_to_eur: Decimal,
    /// 1 MAD in EUR.
    pub mad_to_eur: Decimal,
    /// 1 GBP in EUR.
    pub gbp_to_eur: Decimal,
}

/// Lookup table of multiplicative rates to EUR, with EUR pinned at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    usd_to_eur: Decimal,
    mad_to_eur: Decimal,
    gbp_to_eur: Decimal,
}

impl RateTable {
    /// Builds a table from the three editable rates.
    #[must_use]
    pub const fn new(usd_to_eur: Decimal, mad_to_eur: Decimal, gbp_to_eur: Decimal) -> Self {
        Self {
            usd_to_eur,
            mad_to_eur,
            gbp_to_eur,
        }
    }

    /// The rate to EUR for the given currency. EUR is always 1.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Eur => Decimal::ONE,
            Currency::Usd => self.usd_to_eur,
            Currency::Mad => self.mad_to_eur,
            Currency::Gbp => self.gbp_to_eur,
        }
    }

    /// The editable rates, for the settings update payload.
    #[must_use]
    pub const fn settings(&self) -> CurrencySettings {
        CurrencySettings {
            usd_to_eur: self.usd_to_eur,
            mad_to_eur: self.mad_to_eur,
            gbp_to_eur: self.gbp_to_eur,
        }
    }
}

impl From<CurrencySettings> for RateTable {
    fn from(settings: CurrencySettings) -> Self {
        Self::new(
            settings.usd_to_eur,
            settings.mad_to_eur,
            settings.gbp_to_eur,
        )
    }
}
