use crate::fx::CurrencyCode;
use crate::navigation::PageReference;
use crate::notifications::Notification;
use crate::trades::NewTrade;

/// Side effect requested by the reducer. The controller carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    LookupRate {
        generation: u64,
        sell_currency: CurrencyCode,
        buy_currency: CurrencyCode,
    },
    CreateTrade {
        generation: u64,
        trade: NewTrade,
    },
    Notify(Notification),
    Navigate(PageReference),
}
