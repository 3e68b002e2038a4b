//! Exchange rates and EUR conversion.

pub mod conversion;
pub mod rates;

pub use conversion::{convert_to_eur, round_display};
pub use rates::{CurrencySettings, RateTable};
