//! Engine configuration and errors

pub mod config;
pub mod error;

pub use config::BookingConfig;
pub use error::{FlowError, FlowResult};
