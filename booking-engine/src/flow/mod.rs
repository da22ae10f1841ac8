//! Booking Flow Module
//!
//! The step state machine that sequences item selection, date and slot
//! picking, and schedule confirmation for one booking session.

mod controller;

pub use controller::*;
