/// Title used for every submission validation failure
pub const INVALID_INPUT_TITLE: &str = "Invalid Input";

pub const SELL_AMOUNT_POSITIVE_MESSAGE: &str = "Sell Amount must be greater than zero.";

pub const CURRENCY_REQUIRED_MESSAGE: &str = "Currency fields cannot be empty.";

/// Raised when sell amount times rate does not fit a decimal
pub const BUY_AMOUNT_OVERFLOW_MESSAGE: &str = "Buy Amount is too large to calculate.";

/// Title of the notification raised when a rate lookup is rejected
pub const RATE_FETCH_ERROR_TITLE: &str = "Error fetching rate";

/// Title of the notification raised when trade creation is rejected
pub const TRADE_CREATE_ERROR_TITLE: &str = "Error creating trade";

/// Message used when a rejection carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

pub const TRADE_CREATED_TITLE: &str = "Trade created successfully";

pub const TRADE_CREATED_MESSAGE: &str = "The trade has been created successfully.";

/// Object whose list view the cancel action returns to
pub const TRADE_OBJECT_API_NAME: &str = "Trade__c";

/// List view filter applied when the form is cancelled
pub const DEFAULT_LIST_FILTER: &str = "All";
