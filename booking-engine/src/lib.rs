//! Booking engine for the tailoring marketplace
//!
//! The computation core behind the multi-step "book a tailor" flow:
//! item selection, calendar date, time slot, measurement/stitching
//! schedule, confirmation. The surrounding application owns fetching,
//! rendering and persistence; this crate is handed already-deserialized
//! catalog, price and availability data and emits a finalized
//! [`BookingPayload`](shared::models::BookingPayload).
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── core/       # configuration, errors
//! ├── catalog/    # service-group classification
//! ├── pricing/    # price book, cart, breakdown
//! ├── calendar/   # availability window, slot catalog
//! ├── schedule/   # derived schedule dates
//! ├── flow/       # booking flow state machine
//! └── utils/      # logging, time helpers
//! ```

pub mod calendar;
pub mod catalog;
pub mod core;
pub mod flow;
pub mod pricing;
pub mod schedule;
pub mod utils;

// Re-export public types
pub use crate::core::{BookingConfig, FlowError, FlowResult};
pub use calendar::{AvailabilityCalendar, CalendarDay, parse_start_hour, time_slots};
pub use catalog::classify;
pub use flow::{BookingFlow, BookingStep};
pub use pricing::{Cart, CartLine, PriceBook, compute_breakdown, per_unit_discount};
pub use schedule::resolve_schedule;
pub use utils::logger::{init_logger, init_logger_with_level};
