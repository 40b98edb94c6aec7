//! Trades module - trade request models and the trade creation contract.

mod trades_model;
mod trades_traits;

pub use trades_model::{CreatedTrade, NewTrade};
pub use trades_traits::TradeCreationServiceTrait;
