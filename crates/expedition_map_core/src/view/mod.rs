//! Map surface parameters and helpers.
//!
//! # Responsibility
//! - Fix the map image placement and zoom limits in the shared frame.
//! - Translate between player-facing `x, y` text and map positions.
//! - Resolve icon and image asset paths.

pub mod assets;
pub mod coords;

use crate::model::marker::MapPosition;

/// Map image served relative to the base path.
pub const MAP_IMAGE: &str = "/map-v2.webp";

/// Fixed view configuration of the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// South-west and north-east corners of the map image.
    pub image_bounds: (MapPosition, MapPosition),
    pub initial_center: MapPosition,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom used when flying to a typed coordinate.
    pub fly_to_zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            image_bounds: (MapPosition::new(-36.0, 0.0), MapPosition::new(268.0, 440.0)),
            initial_center: MapPosition::new(163.0, 262.0),
            initial_zoom: 2.0,
            min_zoom: 1.2,
            max_zoom: 6.0,
            fly_to_zoom: 5.0,
        }
    }
}

impl MapView {
    /// Returns whether `position` lies on the map image.
    pub fn contains(&self, position: MapPosition) -> bool {
        let (south_west, north_east) = self.image_bounds;
        (south_west.row..=north_east.row).contains(&position.row)
            && (south_west.column..=north_east.column).contains(&position.column)
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
