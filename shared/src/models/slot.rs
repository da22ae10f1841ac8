//! Time Slot Model

use serde::{Deserialize, Serialize};

/// One bookable measurement window
///
/// Generated, never fetched; the same set applies to every date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: u32,
    /// Human label, 12-hour clock with am/pm and no leading zero
    /// (e.g. "4pm-6pm")
    pub label: String,
    /// Start hour, 24-hour clock [0, 23]
    pub start_hour: u32,
    /// End hour, 24-hour clock [0, 23]
    pub end_hour: u32,
}
