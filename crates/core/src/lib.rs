//! Trade Desk Core - the client-side orchestration behind the "new trade" form.
//!
//! This crate owns the form state machine and defines the traits through which
//! it reaches its collaborators: the rate lookup service, the trade creation
//! service, page navigation and user notifications. It performs no rendering
//! and no persistence of its own.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod navigation;
pub mod notifications;
pub mod settings;
pub mod trade_form;
pub mod trades;
pub mod utils;

pub use trade_form::{FormPhase, FormState, TradeFormController};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
