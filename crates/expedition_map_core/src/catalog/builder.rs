//! Marker catalog construction.
//!
//! # Responsibility
//! - Merge the four source collections into one ordered marker sequence.
//! - Apply each source's fixed coordinate transform into the shared frame.
//!
//! # Invariants
//! - Output order is exhibits, friends, solutions, mailboxes.
//! - Building never fails; landmarks without numeric `x`/`z` are omitted.
//! - Identical sources always produce deep-equal catalogs.

use crate::catalog::filter::MarkerFilter;
use crate::catalog::sources::{CatalogSources, LandmarkRecord, PointRecord, SolutionRecord};
use crate::model::marker::{MapPosition, Marker, MarkerCategory};
use log::info;

/// Offset added to both landmark axes to reach the shared map frame.
pub const LANDMARK_OFFSET: f64 = 200.0;

/// Immutable, ordered set of every marker shown on the map.
///
/// Built once at startup and handed to consumers by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCatalog {
    markers: Vec<Marker>,
    dropped_landmarks: usize,
    rejected_entries: usize,
}

impl MarkerCatalog {
    /// Builds the catalog from raw source collections.
    pub fn build(sources: &CatalogSources) -> Self {
        let placed: Vec<Marker> = sources
            .landmarks
            .iter()
            .filter(|record| is_placeable_landmark(record))
            .filter_map(exhibit_marker)
            .collect();
        let dropped_landmarks = sources.landmarks.len() - placed.len();

        let mut markers = placed;
        markers.reserve(
            sources.friends.len() + sources.solutions.len() + sources.mailboxes.len(),
        );
        markers.extend(sources.friends.iter().map(friend_marker));
        markers.extend(
            sources
                .solutions
                .iter()
                .enumerate()
                .map(|(index, record)| solution_marker(index, record)),
        );
        markers.extend(sources.mailboxes.iter().map(mailbox_marker));

        let catalog = Self {
            markers,
            dropped_landmarks,
            rejected_entries: sources.rejected_entries,
        };
        info!(
            "event=catalog_build module=catalog status=ok markers={} exhibits={} friends={} solutions={} mailboxes={} dropped_landmarks={} rejected_entries={}",
            catalog.markers.len(),
            catalog.count_by_category(MarkerCategory::Exhibit),
            catalog.count_by_category(MarkerCategory::Friend),
            catalog.count_by_category(MarkerCategory::Solution),
            catalog.count_by_category(MarkerCategory::Mailbox),
            catalog.dropped_landmarks,
            catalog.rejected_entries
        );
        catalog
    }

    /// Full marker sequence in catalog order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the first marker with `id`.
    pub fn find(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn count_by_category(&self, category: MarkerCategory) -> usize {
        self.markers
            .iter()
            .filter(|marker| marker.category() == category)
            .count()
    }

    /// Number of landmark entries omitted for missing coordinates.
    pub fn dropped_landmarks(&self) -> usize {
        self.dropped_landmarks
    }

    /// Number of source entries skipped at load time for a malformed shape.
    pub fn rejected_entries(&self) -> usize {
        self.rejected_entries
    }

    /// Markers whose category is enabled in `filter`, in catalog order.
    pub fn visible(&self, filter: &MarkerFilter) -> impl Iterator<Item = &Marker> + '_ {
        let filter = *filter;
        self.markers
            .iter()
            .filter(move |marker| filter.is_visible(marker.category()))
    }
}

/// Landmark inclusion predicate: both coordinates must be finite numbers.
pub fn is_placeable_landmark(record: &LandmarkRecord) -> bool {
    record.coordinates().is_some()
}

fn exhibit_marker(record: &LandmarkRecord) -> Option<Marker> {
    let (x, z) = record.coordinates()?;
    Some(Marker::exhibit(
        record.name.clone(),
        MapPosition::new(z + LANDMARK_OFFSET, x + LANDMARK_OFFSET),
        record.title.clone().unwrap_or_default(),
        record.description.clone().unwrap_or_default(),
    ))
}

fn friend_marker(record: &PointRecord) -> Marker {
    Marker::friend(record.name.clone(), MapPosition::new(record.z, record.x))
}

fn mailbox_marker(record: &PointRecord) -> Marker {
    Marker::mailbox(record.name.clone(), MapPosition::new(record.z, record.x))
}

fn solution_marker(index: usize, record: &SolutionRecord) -> Marker {
    let coordinates = record.coordinates;
    Marker::solution(
        solution_id(coordinates.x, coordinates.z, index),
        MapPosition::new(coordinates.z, coordinates.x),
        record.solution_text.clone(),
        record.images.clone(),
    )
}

/// Composite solution id; the index keeps co-located solutions distinct.
///
/// Negative zero prints as `0`.
pub fn solution_id(x: f64, z: f64, index: usize) -> String {
    format!(
        "solution_{}_{}_{index}",
        without_negative_zero(x),
        without_negative_zero(z)
    )
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
