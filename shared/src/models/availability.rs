//! Date Availability Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date availability record
///
/// Sparse: the absence of a record for a date means "open, zero
/// bookings". Keyed at calendar-day granularity; any time-of-day the
/// upstream attaches is discarded at the ingestion boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateAvailability {
    pub date: NaiveDate,
    pub is_closed: bool,
    pub booked_order_count: u32,
}

/// Resolved status for one calendar day
///
/// "Closed" and "already booked" are independent reasons so the UI can
/// explain why a date is blocked; both collapse to `is_available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStatus {
    pub is_closed: bool,
    pub booked_order_count: u32,
    pub is_available: bool,
}
