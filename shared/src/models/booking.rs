//! Booking Payload Models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Computed totals for the current selection
///
/// Derived, never stored: always a pure function of the current lines
/// and price records, recomputed whenever either changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceBreakdown {
    /// Sum of full prices in currency units
    pub total_full_price: f64,
    /// Sum of per-unit discounts in currency units
    pub total_discount: f64,
    /// Platform fee in currency units
    pub platform_fee: f64,
    /// Grand total in currency units
    pub final_total: f64,
    /// Same value as `total_discount`, exposed separately for the
    /// "you saved X" banner
    pub total_savings: f64,
    pub total_item_count: i32,
}

/// The four derived dates of a confirmed order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleResolution {
    /// Wall-clock moment of confirmation
    pub booking_date: NaiveDateTime,
    /// Next-day measurement appointment at the slot's start hour
    pub measurement_date: NaiveDateTime,
    /// Chosen stitching day at midnight
    pub stitching_date: NaiveDateTime,
    /// Stitching day plus the delivery lead
    pub delivery_date: NaiveDateTime,
}

/// One finalized order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingLine {
    /// Catalog item reference (String ID)
    pub item_id: String,
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency units (0 when no price record matched)
    pub unit_price: f64,
    /// Unit discount in currency units
    pub unit_discount: f64,
}

/// Finalized booking handed to the external order-creation collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPayload {
    pub booking_id: Uuid,
    pub lines: Vec<BookingLine>,
    pub breakdown: PriceBreakdown,
    pub schedule: ScheduleResolution,
}
