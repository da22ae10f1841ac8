//! Calendar Module
//!
//! The browsable availability window and the fixed slot catalog.

mod availability;
mod slots;

pub use availability::*;
pub use slots::*;
