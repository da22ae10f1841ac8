//! Engine error types
//!
//! None of these unwind the flow: every failure is returned synchronously
//! and leaves the session state untouched, so the caller can render it
//! and retry.

use chrono::NaiveDate;
use thiserror::Error;

use crate::flow::BookingStep;

/// Booking engine error enum
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    /// Required external data has not been loaded yet; the flow stays in
    /// its current step and the caller shows a loading indicator.
    #[error("{what} not loaded yet")]
    DataUnavailable { what: &'static str },

    /// The requested action is not valid in the current step.
    #[error("cannot {action} while in step {from:?}")]
    InvalidTransition {
        from: BookingStep,
        action: &'static str,
    },

    /// Advancing past item selection requires at least one line.
    #[error("cannot continue with an empty selection")]
    EmptySelection,

    /// The date is outside the window, in the past, closed, or booked.
    #[error("date {date} is not selectable")]
    DateNotSelectable { date: NaiveDate },

    /// The slot id does not name a generated slot.
    #[error("unknown time slot id {id}")]
    UnknownSlot { id: u32 },

    /// The item id does not name a catalog item.
    #[error("unknown catalog item {id}")]
    UnknownItem { id: String },

    /// A slot label could not be parsed back to a start hour.
    #[error("malformed slot label: {label}")]
    InvalidSlotLabel { label: String },
}

/// Result type alias for engine operations
pub type FlowResult<T> = std::result::Result<T, FlowError>;
