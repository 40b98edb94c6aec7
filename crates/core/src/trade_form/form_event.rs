use rust_decimal::Decimal;

use crate::errors::ServiceError;
use crate::fx::CurrencyCode;
use crate::trades::CreatedTrade;

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Input(InputEvent),
    Completion(CompletionEvent),
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SellCurrencyChanged { currency: Option<CurrencyCode> },
    BuyCurrencyChanged { currency: Option<CurrencyCode> },
    SellAmountChanged { amount: Decimal },
    RefreshRateRequested,
    SubmitRequested,
    CancelRequested,
}

/// An outstanding collaborator call settled.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionEvent {
    RateResolved {
        generation: u64,
        result: Result<Decimal, ServiceError>,
    },
    TradeResolved {
        generation: u64,
        result: Result<CreatedTrade, ServiceError>,
    },
}

impl From<InputEvent> for FormEvent {
    fn from(event: InputEvent) -> Self {
        FormEvent::Input(event)
    }
}

impl From<CompletionEvent> for FormEvent {
    fn from(event: CompletionEvent) -> Self {
        FormEvent::Completion(event)
    }
}
