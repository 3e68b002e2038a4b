//! Console command implementations.

pub mod budget;
pub mod offers;
pub mod rates;
pub mod requests;

pub use budget::BudgetCommands;
pub use offers::OffersCommands;
pub use rates::RatesCommands;
pub use requests::RequestCommands;
