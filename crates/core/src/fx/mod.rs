//! FX (Foreign Exchange) module - supported currencies and the rate lookup contract.

pub mod currency;
mod fx_traits;

pub use currency::{currency_options, CurrencyCode, CurrencyOption};
pub use fx_traits::RateLookupServiceTrait;
