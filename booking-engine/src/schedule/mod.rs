//! Schedule Resolution
//!
//! Derives the booking/measurement/stitching/delivery date-times for a
//! confirmed date and slot.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared::models::{ScheduleResolution, TimeSlot};

use crate::calendar::parse_start_hour;
use crate::core::{BookingConfig, FlowResult};
use crate::utils::time::{at_hour, day_start};

/// Resolve the four schedule dates
///
/// Deterministic in `(now, stitching_date, slot)`. Availability was
/// already validated at date selection and is not re-checked here.
///
/// The slot disambiguates the measurement appointment only; the
/// stitching day itself is always normalized to midnight.
pub fn resolve_schedule(
    now: NaiveDateTime,
    stitching_date: NaiveDate,
    slot: &TimeSlot,
    config: &BookingConfig,
) -> FlowResult<ScheduleResolution> {
    let start_hour = parse_start_hour(&slot.label)?;

    let stitching = day_start(stitching_date);

    Ok(ScheduleResolution {
        booking_date: now,
        measurement_date: at_hour(now.date() + Duration::days(1), start_hour),
        stitching_date: stitching,
        delivery_date: stitching + Duration::days(config.delivery_lead_days),
    })
}
