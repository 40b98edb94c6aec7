//! Navigation module.
//!
//! Page references the trade form can leave to, and the sink trait the host
//! shell implements to actually move the user there.

mod navigation_model;
mod sink;

pub use navigation_model::*;
pub use sink::*;
