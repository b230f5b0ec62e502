//! Save upload handling.
//!
//! # Responsibility
//! - Turn an uploaded save file into completion stats.
//! - Model the stats display state around uploads.
//!
//! # Invariants
//! - Each upload is computed independently from its own input.
//! - No upload state is persisted beyond the owning `StatsBoard`.

pub mod board;
pub mod import;
