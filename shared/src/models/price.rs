//! Price Record Model

use serde::{Deserialize, Serialize};

/// Discount encoding used by a price record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Pricing and discount terms for one catalog item
///
/// Matched to a [`CatalogItem`](super::CatalogItem) by identifier first,
/// trimmed case-insensitive name second. Upstream sometimes supplies only
/// a discounted absolute price (`discount_price`) and sometimes only a
/// discount amount (`discount_value`); never both meaningfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Catalog item reference (String ID), when the upstream supplied one
    pub item_id: Option<String>,
    pub name: String,
    /// Full price in currency units
    pub full_price: f64,
    /// Discounted absolute price in currency units
    pub discount_price: Option<f64>,
    pub discount_type: Option<DiscountType>,
    /// Discount amount per unit in currency units
    pub discount_value: Option<f64>,
    /// Estimated turnaround in days
    pub estimated_days: u32,
    pub is_available: bool,
    pub notes: String,
}
