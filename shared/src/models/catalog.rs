//! Catalog Item Model

use serde::{Deserialize, Serialize};

/// Service group a catalog item belongs to
///
/// Derived from the item name by keyword classification in the engine;
/// the upstream catalog does not carry it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceGroup {
    #[default]
    CustomTailoring,
    Alterations,
    FormalSuits,
    WeddingAttire,
}

/// Catalog item (externally owned, immutable for the session)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Item reference (String ID)
    pub id: String,
    pub name: String,
}
