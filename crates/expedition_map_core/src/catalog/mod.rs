//! Marker catalog: source loading, merge and filtering.
//!
//! # Responsibility
//! - Turn the static data sets into one immutable marker sequence at startup.
//! - Answer visibility queries for the map filter controls.
//!
//! # Invariants
//! - The catalog is never mutated after `MarkerCatalog::build`.
//! - Malformed landmark entries are dropped by an explicit predicate, never
//!   surfaced as errors.
//! - Entries of the wrong shape are skipped and counted per load.

pub mod builder;
pub mod filter;
pub mod sources;
