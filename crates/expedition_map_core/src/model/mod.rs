//! Domain model for map markers and completion statistics.
//!
//! # Responsibility
//! - Define canonical data structures shared by catalog, save import and CLI.
//!
//! # Invariants
//! - Markers are immutable once placed in a catalog.
//! - Stats values are replaced wholesale, never merged.

pub mod marker;
pub mod stats;
