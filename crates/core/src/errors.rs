//! Core error types for the trade desk.
//!
//! Collaborator failures, input validation failures and configuration problems
//! all funnel into [`Error`]. The trade form never lets one of these escape a
//! handler; they are turned into notifications at the point of the call.

use thiserror::Error;

use crate::constants::{
    BUY_AMOUNT_OVERFLOW_MESSAGE, CURRENCY_REQUIRED_MESSAGE, SELL_AMOUNT_POSITIVE_MESSAGE,
};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trade desk.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Service call failed: {0}")]
    Service(#[from] ServiceError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Rejection reported by an external collaborator (rate lookup, trade creation).
///
/// The message is optional: some backends reject without a human-readable body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{}", .message.as_deref().unwrap_or("no message provided"))]
pub struct ServiceError {
    pub message: Option<String>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A rejection that carries no message.
    pub fn without_message() -> Self {
        Self { message: None }
    }

    /// Collapses any crate error into a service rejection.
    ///
    /// Non-service errors keep their `Display` text as the message.
    pub fn from_error(err: Error) -> Self {
        match err {
            Error::Service(service_error) => service_error,
            other => Self::new(other.to_string()),
        }
    }

    /// Returns the message, or `fallback` when the service gave none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => fallback,
        }
    }
}

/// Validation errors for user input.
///
/// The `Display` text of the submission checks is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{}", SELL_AMOUNT_POSITIVE_MESSAGE)]
    NonPositiveSellAmount,

    #[error("{}", CURRENCY_REQUIRED_MESSAGE)]
    MissingCurrency,

    #[error("{}", BUY_AMOUNT_OVERFLOW_MESSAGE)]
    BuyAmountOverflow,

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
