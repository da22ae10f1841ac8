//! Time helpers — day arithmetic shared by the calendar and scheduler
//!
//! The engine works in the customer's naive wall-clock; "now" is always
//! threaded in explicitly, never read from the system clock here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Date at midnight
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Date at a whole hour, minutes and seconds zeroed
///
/// Hours outside 0-23 fall back to midnight.
pub fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap_or_else(|| day_start(date))
}
