//! Core domain logic for the Monster's Expedition map viewer.
//! Marker catalog assembly and save-file completion stats live here; the
//! rendering surface only consumes these values.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod save;
pub mod view;

pub use catalog::builder::{is_placeable_landmark, solution_id, MarkerCatalog, LANDMARK_OFFSET};
pub use catalog::filter::MarkerFilter;
pub use catalog::sources::{
    CatalogLoadError, CatalogSources, LandmarkRecord, PointRecord, SolutionCoordinates,
    SolutionRecord, SourceKind,
};
pub use config::{ConfigError, LogLevel, LoggingConfig, ViewerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::marker::{MapPosition, Marker, MarkerCategory, MarkerDetail};
pub use model::stats::{CompletionSummary, StatsResult, TOTAL_EXHIBITS, TOTAL_FRIENDS};
pub use save::board::{StatsBoard, UploadTicket};
pub use save::import::{
    compute_stats, compute_stats_from_bytes, SaveImportError, SaveProfile, SaveValidationError,
};
pub use view::assets::{AssetPaths, MarkerIcon};
pub use view::coords::{format_cursor, CoordinateQuery};
pub use view::MapView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
