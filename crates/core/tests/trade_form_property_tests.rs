//! Property-based integration tests for the trade form state machine.
//!
//! These drive the pure reducer directly, so no runtime or collaborator is
//! involved: every call the form wants to make shows up as a `FormEffect`.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tradedesk_core::fx::CurrencyCode;
use tradedesk_core::settings::TradeFormSettings;
use tradedesk_core::trade_form::{
    reduce, CompletionEvent, FormEffect, FormEvent, FormState, InputEvent,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_currency() -> impl Strategy<Value = CurrencyCode> {
    prop_oneof![
        Just(CurrencyCode::Usd),
        Just(CurrencyCode::Eur),
        Just(CurrencyCode::Gbp),
    ]
}

fn arb_selection() -> impl Strategy<Value = Option<CurrencyCode>> {
    proptest::option::of(arb_currency())
}

/// Amounts with up to four decimal places, negative values included.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000, 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

#[derive(Debug, Clone)]
enum Step {
    Amount(Decimal),
    Rate(Decimal),
}

fn arb_steps(max_len: usize) -> impl Strategy<Value = Vec<Step>> {
    proptest::collection::vec(
        prop_oneof![
            arb_amount().prop_map(Step::Amount),
            arb_rate().prop_map(Step::Rate),
        ],
        0..=max_len,
    )
}

// =============================================================================
// Helpers
// =============================================================================

fn apply(state: &mut FormState, event: impl Into<FormEvent>) -> Vec<FormEffect> {
    reduce(state, event.into(), &TradeFormSettings::default())
}

fn lookup_count(effects: &[FormEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, FormEffect::LookupRate { .. }))
        .count()
}

fn creates_trade(effects: &[FormEffect]) -> bool {
    effects
        .iter()
        .any(|e| matches!(e, FormEffect::CreateTrade { .. }))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The derived amount is exact after every amount change and every
    /// successful rate lookup.
    #[test]
    fn prop_buy_amount_is_sell_amount_times_rate(
        sell in arb_currency(),
        buy in arb_currency(),
        steps in arb_steps(30),
    ) {
        let mut state = FormState::new();
        apply(&mut state, InputEvent::SellCurrencyChanged { currency: Some(sell) });
        apply(&mut state, InputEvent::BuyCurrencyChanged { currency: Some(buy) });

        for step in steps {
            match step {
                Step::Amount(amount) => {
                    apply(&mut state, InputEvent::SellAmountChanged { amount });
                }
                Step::Rate(rate) => {
                    apply(&mut state, InputEvent::RefreshRateRequested);
                    let generation = state.rate_generation();
                    apply(&mut state, CompletionEvent::RateResolved { generation, result: Ok(rate) });
                    prop_assert_eq!(state.rate(), rate);
                }
            }
            prop_assert_eq!(state.buy_amount(), state.sell_amount() * state.rate());
        }
    }

    /// A rate lookup is issued exactly when both currencies are selected.
    #[test]
    fn prop_refresh_looks_up_iff_pair_complete(
        sell in arb_selection(),
        buy in arb_selection(),
    ) {
        let mut state = FormState::new();
        apply(&mut state, InputEvent::SellCurrencyChanged { currency: sell });
        apply(&mut state, InputEvent::BuyCurrencyChanged { currency: buy });
        let rate_before = state.rate();
        let buy_amount_before = state.buy_amount();

        let effects = apply(&mut state, InputEvent::RefreshRateRequested);

        let expected = usize::from(sell.is_some() && buy.is_some());
        prop_assert_eq!(lookup_count(&effects), expected);
        prop_assert_eq!(state.rate(), rate_before);
        prop_assert_eq!(state.buy_amount(), buy_amount_before);
    }

    /// A zero sell amount never reaches the trade creation service.
    #[test]
    fn prop_zero_amount_never_submits(
        sell in arb_selection(),
        buy in arb_selection(),
    ) {
        let mut state = FormState::new();
        apply(&mut state, InputEvent::SellCurrencyChanged { currency: sell });
        apply(&mut state, InputEvent::BuyCurrencyChanged { currency: buy });
        apply(&mut state, InputEvent::SellAmountChanged { amount: Decimal::ZERO });

        let effects = apply(&mut state, InputEvent::SubmitRequested);
        prop_assert!(!creates_trade(&effects));
    }

    /// An empty buy currency never reaches the trade creation service.
    #[test]
    fn prop_empty_buy_currency_never_submits(
        sell in arb_selection(),
        amount in arb_amount(),
    ) {
        let mut state = FormState::new();
        apply(&mut state, InputEvent::SellCurrencyChanged { currency: sell });
        apply(&mut state, InputEvent::SellAmountChanged { amount });

        let effects = apply(&mut state, InputEvent::SubmitRequested);
        prop_assert!(!creates_trade(&effects));
    }
}
