//! Common types for the shared crate

/// Catalog item / price record identifier (upstream string ID)
pub type Identifier = String;
