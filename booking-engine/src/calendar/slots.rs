//! Slot Catalog
//!
//! Generates the fixed set of bookable measurement windows and parses
//! slot labels back to 24-hour start hours. The same set applies to
//! every date: capacity is enforced upstream by whole-date closure, not
//! per slot.

use shared::models::TimeSlot;

use crate::core::{BookingConfig, FlowError, FlowResult};

/// 12-hour clock label for an hour, no leading zero ("8am", "12pm")
fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let (display, suffix) = match hour {
        0 => (12, "am"),
        1..=11 => (hour, "am"),
        12 => (12, "pm"),
        _ => (hour - 12, "pm"),
    };
    format!("{}{}", display, suffix)
}

/// Generate the bookable slots for one day
pub fn time_slots(config: &BookingConfig) -> Vec<TimeSlot> {
    (0..config.slot_count)
        .map(|i| {
            let start = config.slot_start_hour + i * config.slot_duration_hours;
            let end = start + config.slot_duration_hours;
            TimeSlot {
                id: i + 1,
                label: format!("{}-{}", hour_label(start), hour_label(end)),
                start_hour: start % 24,
                end_hour: end % 24,
            }
        })
        .collect()
}

/// Parse a slot label back to its 24-hour start hour
///
/// Takes the text before the dash, strips everything but digits, and
/// applies the am/pm suffix: 12pm → 12, 12am → 0, Npm → N+12, Nam → N.
pub fn parse_start_hour(label: &str) -> FlowResult<u32> {
    let malformed = || FlowError::InvalidSlotLabel {
        label: label.to_string(),
    };

    let start_part = label.split('-').next().unwrap_or(label).to_lowercase();
    let digits: String = start_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let hour: u32 = digits.parse().map_err(|_| malformed())?;

    let is_pm = start_part.contains("pm");
    let hour = match (hour, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) if h < 12 => h + 12,
        (h, _) => h,
    };

    if hour > 23 {
        return Err(malformed());
    }
    Ok(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_fixed_slots() {
        let slots = time_slots(&BookingConfig::default());

        let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "8am-10am",
                "10am-12pm",
                "12pm-2pm",
                "2pm-4pm",
                "4pm-6pm",
                "6pm-8pm",
                "8pm-10pm",
            ]
        );

        assert_eq!(slots[0].id, 1);
        assert_eq!(slots[0].start_hour, 8);
        assert_eq!(slots[0].end_hour, 10);
        assert_eq!(slots[6].start_hour, 20);
        assert_eq!(slots[6].end_hour, 22);
    }

    #[test]
    fn test_labels_round_trip() {
        for slot in time_slots(&BookingConfig::default()) {
            assert_eq!(parse_start_hour(&slot.label).unwrap(), slot.start_hour);
        }
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(parse_start_hour("12am-2am").unwrap(), 0);
        assert_eq!(parse_start_hour("12pm-2pm").unwrap(), 12);
    }

    #[test]
    fn test_parse_afternoon() {
        assert_eq!(parse_start_hour("4pm-6pm").unwrap(), 16);
        assert_eq!(parse_start_hour("8am-10am").unwrap(), 8);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_start_hour("4PM-6PM").unwrap(), 16);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_start_hour("afternoon").is_err());
        assert!(parse_start_hour("").is_err());
        assert!(parse_start_hour("25pm-26pm").is_err());
    }
}
