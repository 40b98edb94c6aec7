use super::currency::CurrencyCode;
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Contract of the exchange-rate lookup service.
///
/// Rejections are expected as `Error::Service` carrying a human-readable message.
#[async_trait]
pub trait RateLookupServiceTrait: Send + Sync {
    /// Returns the multiplier converting an amount of `sell_currency` into `buy_currency`.
    async fn lookup_rate(
        &self,
        sell_currency: CurrencyCode,
        buy_currency: CurrencyCode,
    ) -> Result<Decimal>;
}
