//! Supported currencies and the option list offered by selection controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Currencies a trade can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
}

impl CurrencyCode {
    /// Every supported currency, in the order selection controls list them.
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Usd, CurrencyCode::Eur, CurrencyCode::Gbp];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
        }
    }

    /// Parses the raw value of a selection control.
    ///
    /// Empty text means the selection was cleared.
    pub fn parse_selection(value: &str) -> Result<Option<CurrencyCode>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| Error::UnsupportedCurrency(s.to_string()))
    }
}

/// A single entry of a currency selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyOption {
    pub label: String,
    pub value: CurrencyCode,
}

/// Options for the sell and buy currency pickers.
pub fn currency_options() -> Vec<CurrencyOption> {
    CurrencyCode::ALL
        .into_iter()
        .map(|code| CurrencyOption {
            label: code.as_str().to_string(),
            value: code,
        })
        .collect()
}
