//! Trade form module - the state machine behind the "new trade" form.
//!
//! Input handlers and collaborator completions are both [`FormEvent`]s. The
//! pure [`reduce`] function turns an event into state changes plus a list of
//! [`FormEffect`]s, and [`TradeFormController`] carries those effects out.

mod form_controller;
mod form_effect;
mod form_event;
mod form_reducer;
mod form_state;


pub use form_controller::TradeFormController;
pub use form_effect::FormEffect;
pub use form_event::{CompletionEvent, FormEvent, InputEvent};
pub use form_reducer::{reduce, validate_submission};
pub use form_state::{FormPhase, FormState};
