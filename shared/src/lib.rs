//! Shared types for the tailoring marketplace booking engine
//!
//! Data models that cross the engine boundary: the catalog and price
//! inputs handed in by the surrounding application, the availability
//! records fetched per seller, and the finalized booking payload the
//! engine emits on confirmation.

pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
