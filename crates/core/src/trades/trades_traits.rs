use super::trades_model::{CreatedTrade, NewTrade};
use crate::errors::Result;
use async_trait::async_trait;

/// Contract of the trade persistence service.
///
/// A rejection may come without a message; callers supply their own fallback.
#[async_trait]
pub trait TradeCreationServiceTrait: Send + Sync {
    async fn create_trade(&self, new_trade: NewTrade) -> Result<CreatedTrade>;
}
