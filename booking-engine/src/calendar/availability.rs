//! Availability Calendar
//!
//! Merges sparse per-date availability records into a browsable booking
//! window. The upstream scheduling system only commits capacity a fixed
//! number of days out, hence the window cap.

use chrono::{Datelike, Duration, NaiveDate};
use shared::models::{DateAvailability, DateStatus};
use std::collections::HashMap;

/// One rendered day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DateStatus,
    pub is_selectable: bool,
}

/// Browsable booking window over sparse availability data
///
/// "today" is captured at construction and never re-evaluated, so a
/// session that straddles midnight keeps a consistent window.
#[derive(Debug, Clone)]
pub struct AvailabilityCalendar {
    today: NaiveDate,
    window_days: i64,
    by_date: HashMap<NaiveDate, DateAvailability>,
    /// Displayed (year, month)
    displayed: (i32, u32),
}

fn month_index(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

fn month_from_index(index: i32) -> (i32, u32) {
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}

impl AvailabilityCalendar {
    pub fn new(today: NaiveDate, window_days: i64) -> Self {
        Self {
            today,
            window_days,
            by_date: HashMap::new(),
            displayed: (today.year(), today.month()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Last selectable date of the window (inclusive)
    pub fn window_end(&self) -> NaiveDate {
        self.today + Duration::days(self.window_days)
    }

    /// Replace the lookup table with a fresh record set
    ///
    /// Records are keyed at calendar-day granularity.
    pub fn load(&mut self, records: Vec<DateAvailability>) {
        self.by_date = records.into_iter().map(|r| (r.date, r)).collect();
        tracing::debug!(records = self.by_date.len(), "Availability records loaded");
    }

    /// Status for one day; an absent record means open with no bookings
    pub fn status_of(&self, date: NaiveDate) -> DateStatus {
        match self.by_date.get(&date) {
            Some(record) => DateStatus {
                is_closed: record.is_closed,
                booked_order_count: record.booked_order_count,
                is_available: !record.is_closed && record.booked_order_count == 0,
            },
            None => DateStatus {
                is_closed: false,
                booked_order_count: 0,
                is_available: true,
            },
        }
    }

    /// A date can be picked when it is inside the window, not in the
    /// past, and its status is available
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        date >= self.today && date <= self.window_end() && self.status_of(date).is_available
    }

    /// Currently displayed (year, month)
    pub fn displayed_month(&self) -> (i32, u32) {
        self.displayed
    }

    /// Move the view one month forward, clamped to the window's last month
    pub fn next_month(&mut self) {
        self.shift_displayed(1);
    }

    /// Move the view one month back, clamped to the month containing today
    pub fn previous_month(&mut self) {
        self.shift_displayed(-1);
    }

    fn shift_displayed(&mut self, delta: i32) {
        let min = month_index(self.today.year(), self.today.month());
        let end = self.window_end();
        let max = month_index(end.year(), end.month());

        let target = (month_index(self.displayed.0, self.displayed.1) + delta).clamp(min, max);
        self.displayed = month_from_index(target);
    }

    /// Every day of the displayed month with its status and
    /// selectability; the projection the calendar view renders
    pub fn days_in_displayed_month(&self) -> Vec<CalendarDay> {
        let (year, month) = self.displayed;
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };

        first
            .iter_days()
            .take_while(|d| d.year() == year && d.month() == month)
            .map(|date| CalendarDay {
                date,
                status: self.status_of(date),
                is_selectable: self.is_selectable(date),
            })
            .collect()
    }
}
