//! Catalog helpers
//!
//! The catalog itself is externally owned; this module only derives the
//! service group an item belongs to.

mod classifier;

pub use classifier::*;
