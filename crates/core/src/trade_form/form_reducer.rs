//! Pure transition function of the trade form.
//!
//! `reduce` mutates the state in place and returns the effects the controller
//! must perform. It never performs I/O itself.

use rust_decimal::Decimal;

use super::form_effect::FormEffect;
use super::form_event::{CompletionEvent, FormEvent, InputEvent};
use super::form_state::FormState;
use crate::constants::{INVALID_INPUT_TITLE, RATE_FETCH_ERROR_TITLE, TRADE_CREATE_ERROR_TITLE};
use crate::errors::{ServiceError, ValidationError};
use crate::navigation::PageReference;
use crate::notifications::Notification;
use crate::settings::TradeFormSettings;
use crate::trades::{CreatedTrade, NewTrade};

pub fn reduce(
    state: &mut FormState,
    event: FormEvent,
    settings: &TradeFormSettings,
) -> Vec<FormEffect> {
    if state.is_submitted() {
        log::debug!("Trade form already submitted; ignoring {:?}", event);
        return Vec::new();
    }
    match event {
        FormEvent::Input(input) => reduce_input(state, input, settings),
        FormEvent::Completion(completion) => reduce_completion(state, completion, settings),
    }
}

fn reduce_input(
    state: &mut FormState,
    event: InputEvent,
    settings: &TradeFormSettings,
) -> Vec<FormEffect> {
    match event {
        InputEvent::SellCurrencyChanged { currency } => {
            state.set_sell_currency(currency);
            refresh_rate(state)
        }
        InputEvent::BuyCurrencyChanged { currency } => {
            state.set_buy_currency(currency);
            refresh_rate(state)
        }
        InputEvent::SellAmountChanged { amount } => match state.set_sell_amount(amount) {
            Ok(()) => Vec::new(),
            Err(e) => {
                log::warn!("Rejected sell amount {}: {}", amount, e);
                vec![FormEffect::Notify(Notification::error(
                    INVALID_INPUT_TITLE,
                    e.to_string(),
                ))]
            }
        },
        InputEvent::RefreshRateRequested => refresh_rate(state),
        InputEvent::SubmitRequested => submit_trade(state),
        InputEvent::CancelRequested => vec![FormEffect::Navigate(PageReference::object_list(
            settings.trade_object_api_name.clone(),
            settings.list_filter_name.clone(),
        ))],
    }
}

/// Issues a rate lookup when both currencies are selected.
///
/// The generation advances either way, so a lookup still in flight for the
/// previous pair comes back stale.
fn refresh_rate(state: &mut FormState) -> Vec<FormEffect> {
    let generation = state.next_rate_generation();
    let Some((sell_currency, buy_currency)) = state.currency_pair() else {
        log::debug!("Currency pair incomplete; keeping rate {}", state.rate());
        return Vec::new();
    };

    state.mark_rate_pending(generation);
    log::debug!(
        "Requesting {}/{} rate (generation {})",
        sell_currency,
        buy_currency,
        generation
    );
    vec![FormEffect::LookupRate {
        generation,
        sell_currency,
        buy_currency,
    }]
}

/// Checks run before a trade is sent, in order; the first failure wins.
pub fn validate_submission(state: &FormState) -> Result<NewTrade, ValidationError> {
    if state.sell_amount() <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveSellAmount);
    }
    let (sell_currency, buy_currency) = state
        .currency_pair()
        .ok_or(ValidationError::MissingCurrency)?;

    Ok(NewTrade {
        sell_currency,
        sell_amount: state.sell_amount(),
        buy_currency,
    })
}

fn submit_trade(state: &mut FormState) -> Vec<FormEffect> {
    match validate_submission(state) {
        Ok(trade) => {
            let generation = state.next_submit_generation();
            log::debug!(
                "Submitting trade {} {} -> {} (generation {})",
                trade.sell_amount,
                trade.sell_currency,
                trade.buy_currency,
                generation
            );
            vec![FormEffect::CreateTrade { generation, trade }]
        }
        Err(e) => vec![FormEffect::Notify(Notification::error(
            INVALID_INPUT_TITLE,
            e.to_string(),
        ))],
    }
}

fn reduce_completion(
    state: &mut FormState,
    event: CompletionEvent,
    settings: &TradeFormSettings,
) -> Vec<FormEffect> {
    match event {
        CompletionEvent::RateResolved { generation, result } => {
            state.settle_rate(generation);
            if settings.discard_stale_responses && generation != state.rate_generation() {
                log::debug!(
                    "Discarding rate response for generation {} (latest {})",
                    generation,
                    state.rate_generation()
                );
                return Vec::new();
            }
            apply_rate_result(state, result, settings)
        }
        CompletionEvent::TradeResolved { generation, result } => {
            state.settle_submit(generation);
            if settings.discard_stale_responses && generation != state.submit_generation() {
                if let Ok(created) = &result {
                    log::warn!(
                        "Trade {} was created by superseded submission {}; not navigating",
                        created.id,
                        generation
                    );
                } else {
                    log::debug!("Discarding trade response for generation {}", generation);
                }
                return Vec::new();
            }
            apply_trade_result(state, result, settings)
        }
    }
}

fn apply_rate_result(
    state: &mut FormState,
    result: Result<Decimal, ServiceError>,
    settings: &TradeFormSettings,
) -> Vec<FormEffect> {
    match result {
        Ok(rate) => match state.apply_rate(rate) {
            Ok(()) => Vec::new(),
            Err(e) => {
                log::warn!("Rejected rate {}: {}", rate, e);
                vec![FormEffect::Notify(Notification::error(
                    RATE_FETCH_ERROR_TITLE,
                    e.to_string(),
                ))]
            }
        },
        Err(e) => {
            log::warn!("Rate lookup failed: {}", e);
            vec![FormEffect::Notify(Notification::error(
                RATE_FETCH_ERROR_TITLE,
                e.message_or(&settings.unknown_error_message),
            ))]
        }
    }
}

fn apply_trade_result(
    state: &mut FormState,
    result: Result<CreatedTrade, ServiceError>,
    settings: &TradeFormSettings,
) -> Vec<FormEffect> {
    match result {
        Ok(created) => {
            log::info!("Trade {} created", created.id);
            state.mark_submitted();
            vec![
                FormEffect::Notify(Notification::success(
                    settings.success_title.clone(),
                    settings.success_message.clone(),
                )),
                FormEffect::Navigate(PageReference::view_record(created.id)),
            ]
        }
        Err(e) => {
            log::error!("Error creating trade: {}", e);
            vec![FormEffect::Notify(Notification::error(
                TRADE_CREATE_ERROR_TITLE,
                e.message_or(&settings.unknown_error_message),
            ))]
        }
    }
}
