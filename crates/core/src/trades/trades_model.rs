//! Trade domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::CurrencyCode;

/// Payload sent to the trade creation service once the form passes validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub sell_currency: CurrencyCode,
    pub sell_amount: Decimal,
    pub buy_currency: CurrencyCode,
}

/// Identifier of a trade record issued by the trade creation service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedTrade {
    pub id: String,
}

impl CreatedTrade {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_trade_serializes_camel_case() {
        let trade = NewTrade {
            sell_currency: CurrencyCode::Usd,
            sell_amount: dec!(100),
            buy_currency: CurrencyCode::Eur,
        };
        let value = serde_json::to_value(&trade).unwrap();
        assert_eq!(value["sellCurrency"], "USD");
        assert_eq!(value["buyCurrency"], "EUR");
        assert!(value.get("sellAmount").is_some());
    }
}
