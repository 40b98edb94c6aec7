//! Notifications module.
//!
//! Toast-style messages raised by the trade form, and the sink trait the
//! presentation layer implements to show them.

mod notification_model;
mod sink;

pub use notification_model::*;
pub use sink::*;
