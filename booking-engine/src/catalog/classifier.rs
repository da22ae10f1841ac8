//! Service Group Classifier
//!
//! Keyword classification of catalog item names. Rules are checked in a
//! fixed order and the first match wins: "Wedding Suit (2-piece)" must
//! land in WeddingAttire, not FormalSuits, so the wedding keywords are
//! checked before the suit rule.

use shared::models::{CatalogItem, ServiceGroup};

/// Keywords that mark wedding attire, checked before everything else
const WEDDING_KEYWORDS: &[&str] = &[
    "sherwani",
    "kurta",
    "pyjama",
    "wedding suit",
    "indo-western",
];

/// Classify an item name into its service group
///
/// Matching is case-insensitive substring containment.
pub fn classify(name: &str) -> ServiceGroup {
    let name = name.to_lowercase();

    if WEDDING_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return ServiceGroup::WeddingAttire;
    }

    if name.contains("suit") && (name.contains("2-piece") || name.contains("3-piece")) {
        return ServiceGroup::FormalSuits;
    }

    if name.contains("safari") {
        return ServiceGroup::FormalSuits;
    }

    ServiceGroup::CustomTailoring
}

/// Classify a catalog item
pub fn service_group(item: &CatalogItem) -> ServiceGroup {
    classify(&item.name)
}
