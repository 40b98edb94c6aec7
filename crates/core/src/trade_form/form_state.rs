//! State owned by one trade form session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::fx::CurrencyCode;

/// Where the form stands in its workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormPhase {
    /// No usable currency pair, or a pair without any rate yet.
    Empty,
    /// The latest rate lookup has not settled.
    RatePending,
    /// A rate for the current pair is loaded.
    RateReady,
    /// The latest trade creation call has not settled.
    Submitting,
    /// A trade was created and the user was sent to it. Terminal.
    Submitted,
}

/// The single mutable record behind the form.
///
/// `buy_amount` is derived: every write to `sell_amount` or `rate` goes through
/// [`FormState::set_sell_amount`] / [`FormState::apply_rate`], which recompute it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    sell_currency: Option<CurrencyCode>,
    buy_currency: Option<CurrencyCode>,
    sell_amount: Decimal,
    buy_amount: Decimal,
    rate: Decimal,
    has_rate: bool,
    submitted: bool,
    rate_generation: u64,
    pending_rate: Option<u64>,
    submit_generation: u64,
    pending_submit: Option<u64>,
}

fn buy_amount_for(sell_amount: Decimal, rate: Decimal) -> Result<Decimal, ValidationError> {
    sell_amount
        .checked_mul(rate)
        .ok_or(ValidationError::BuyAmountOverflow)
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            sell_currency: None,
            buy_currency: None,
            sell_amount: Decimal::ZERO,
            buy_amount: Decimal::ZERO,
            rate: Decimal::ZERO,
            has_rate: false,
            submitted: false,
            rate_generation: 0,
            pending_rate: None,
            submit_generation: 0,
            pending_submit: None,
        }
    }

    pub fn sell_currency(&self) -> Option<CurrencyCode> {
        self.sell_currency
    }

    pub fn buy_currency(&self) -> Option<CurrencyCode> {
        self.buy_currency
    }

    pub fn sell_amount(&self) -> Decimal {
        self.sell_amount
    }

    pub fn buy_amount(&self) -> Decimal {
        self.buy_amount
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Both currencies, when both are selected.
    pub fn currency_pair(&self) -> Option<(CurrencyCode, CurrencyCode)> {
        self.sell_currency.zip(self.buy_currency)
    }

    /// Generation of the most recently issued rate lookup.
    pub fn rate_generation(&self) -> u64 {
        self.rate_generation
    }

    /// Generation of the most recently issued trade creation.
    pub fn submit_generation(&self) -> u64 {
        self.submit_generation
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else if self.pending_submit.is_some() {
            FormPhase::Submitting
        } else if self.currency_pair().is_none() {
            FormPhase::Empty
        } else if self.pending_rate.is_some() {
            FormPhase::RatePending
        } else if self.has_rate {
            FormPhase::RateReady
        } else {
            FormPhase::Empty
        }
    }

    pub(crate) fn set_sell_currency(&mut self, currency: Option<CurrencyCode>) {
        self.sell_currency = currency;
    }

    pub(crate) fn set_buy_currency(&mut self, currency: Option<CurrencyCode>) {
        self.buy_currency = currency;
    }

    /// Fails without touching any field when the buy amount would overflow.
    pub(crate) fn set_sell_amount(&mut self, amount: Decimal) -> Result<(), ValidationError> {
        self.buy_amount = buy_amount_for(amount, self.rate)?;
        self.sell_amount = amount;
        Ok(())
    }

    /// Fails without touching any field when the buy amount would overflow.
    pub(crate) fn apply_rate(&mut self, rate: Decimal) -> Result<(), ValidationError> {
        self.buy_amount = buy_amount_for(self.sell_amount, rate)?;
        self.rate = rate;
        self.has_rate = true;
        Ok(())
    }

    /// Starts a new rate generation. A lookup is only recorded as pending when issued.
    pub(crate) fn next_rate_generation(&mut self) -> u64 {
        self.rate_generation += 1;
        self.pending_rate = None;
        self.has_rate = false;
        self.rate_generation
    }

    pub(crate) fn mark_rate_pending(&mut self, generation: u64) {
        self.pending_rate = Some(generation);
    }

    pub(crate) fn settle_rate(&mut self, generation: u64) {
        if self.pending_rate == Some(generation) {
            self.pending_rate = None;
        }
    }

    pub(crate) fn next_submit_generation(&mut self) -> u64 {
        self.submit_generation += 1;
        self.pending_submit = Some(self.submit_generation);
        self.submit_generation
    }

    pub(crate) fn settle_submit(&mut self, generation: u64) {
        if self.pending_submit == Some(generation) {
            self.pending_submit = None;
        }
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.pending_submit = None;
        self.submitted = true;
    }
}
