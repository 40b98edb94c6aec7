use std::future::Future;
use std::sync::Arc;

use log::{debug, error};
use rust_decimal::Decimal;
use tokio::sync::mpsc;

use super::form_effect::FormEffect;
use super::form_event::{CompletionEvent, FormEvent, InputEvent};
use super::form_reducer::reduce;
use super::form_state::{FormPhase, FormState};
use crate::errors::{Result, ServiceError};
use crate::fx::{currency_options, CurrencyCode, CurrencyOption, RateLookupServiceTrait};
use crate::navigation::NavigationSink;
use crate::notifications::NotificationSink;
use crate::settings::TradeFormSettings;
use crate::trades::TradeCreationServiceTrait;
use crate::utils::amount_utils::coerce_amount_input;

/// Runs one trade form session.
///
/// Handlers return as soon as the state is updated; rate lookups and trade
/// creation run as Tokio tasks, so they must be called inside a runtime.
/// Completed calls queue up until [`settle_next`](Self::settle_next) or
/// [`settle_all`](Self::settle_all) applies them, one at a time.
pub struct TradeFormController {
    state: FormState,
    settings: TradeFormSettings,
    rate_service: Arc<dyn RateLookupServiceTrait>,
    trade_service: Arc<dyn TradeCreationServiceTrait>,
    navigator: Arc<dyn NavigationSink>,
    notifier: Arc<dyn NotificationSink>,
    completions_tx: mpsc::UnboundedSender<CompletionEvent>,
    completions_rx: mpsc::UnboundedReceiver<CompletionEvent>,
    in_flight: usize,
}

impl TradeFormController {
    pub fn new(
        settings: TradeFormSettings,
        rate_service: Arc<dyn RateLookupServiceTrait>,
        trade_service: Arc<dyn TradeCreationServiceTrait>,
        navigator: Arc<dyn NavigationSink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        TradeFormController {
            state: FormState::new(),
            settings,
            rate_service,
            trade_service,
            navigator,
            notifier,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    pub fn settings(&self) -> &TradeFormSettings {
        &self.settings
    }

    pub fn currency_options(&self) -> Vec<CurrencyOption> {
        currency_options()
    }

    /// Number of collaborator calls whose completion has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn on_sell_currency_changed(&mut self, currency: Option<CurrencyCode>) {
        self.dispatch(InputEvent::SellCurrencyChanged { currency }.into());
    }

    pub fn on_buy_currency_changed(&mut self, currency: Option<CurrencyCode>) {
        self.dispatch(InputEvent::BuyCurrencyChanged { currency }.into());
    }

    pub fn on_sell_amount_changed(&mut self, amount: Decimal) {
        self.dispatch(InputEvent::SellAmountChanged { amount }.into());
    }

    /// Same as [`on_sell_amount_changed`](Self::on_sell_amount_changed) for raw control text.
    pub fn on_sell_amount_input(&mut self, raw: &str) {
        self.on_sell_amount_changed(coerce_amount_input(raw));
    }

    pub fn refresh_rate(&mut self) {
        self.dispatch(InputEvent::RefreshRateRequested.into());
    }

    pub fn submit_trade(&mut self) {
        self.dispatch(InputEvent::SubmitRequested.into());
    }

    pub fn cancel(&mut self) {
        self.dispatch(InputEvent::CancelRequested.into());
    }

    /// Waits for the next outstanding call to settle and applies it.
    ///
    /// Returns false when nothing is in flight.
    pub async fn settle_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.in_flight -= 1;
                self.dispatch(completion.into());
                true
            }
            None => false,
        }
    }

    /// Applies completions until no call is left in flight.
    pub async fn settle_all(&mut self) {
        while self.settle_next().await {}
    }

    fn dispatch(&mut self, event: FormEvent) {
        let effects = reduce(&mut self.state, event, &self.settings);
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: FormEffect) {
        match effect {
            FormEffect::Notify(notification) => self.notifier.notify(notification),
            FormEffect::Navigate(page) => self.navigator.navigate(page),
            FormEffect::LookupRate {
                generation,
                sell_currency,
                buy_currency,
            } => {
                let service = Arc::clone(&self.rate_service);
                self.spawn_call(
                    async move { service.lookup_rate(sell_currency, buy_currency).await },
                    move |result| CompletionEvent::RateResolved { generation, result },
                );
            }
            FormEffect::CreateTrade { generation, trade } => {
                let service = Arc::clone(&self.trade_service);
                self.spawn_call(
                    async move { service.create_trade(trade).await },
                    move |result| CompletionEvent::TradeResolved { generation, result },
                );
            }
        }
    }

    /// Runs a collaborator call in the background and queues its outcome.
    ///
    /// A call that panics settles as a rejection, so `in_flight` always drains.
    fn spawn_call<T, F, C>(&mut self, call: F, complete: C)
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
        C: FnOnce(std::result::Result<T, ServiceError>) -> CompletionEvent + Send + 'static,
    {
        let tx = self.completions_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let result = match tokio::spawn(call).await {
                Ok(result) => result.map_err(ServiceError::from_error),
                Err(e) => {
                    error!("Collaborator call did not complete: {}", e);
                    Err(ServiceError::new(e.to_string()))
                }
            };
            if tx.send(complete(result)).is_err() {
                debug!("Trade form closed before call settled");
            }
        });
    }
}
