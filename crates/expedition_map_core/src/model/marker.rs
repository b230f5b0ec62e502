//! Map marker domain model.
//!
//! # Responsibility
//! - Define the positioned point-of-interest record rendered on the map.
//! - Keep category-specific fields attached to their category only.
//!
//! # Invariants
//! - `id` is non-empty and expected to be unique within one catalog.
//! - `position` is always a finite `(row, column)` pair in the shared frame.
//! - Exhibit text and solution text/images cannot appear on other categories.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of marker categories shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    /// Museum exhibit placed on a landmark.
    Exhibit,
    /// Collectible friend that can be hugged.
    Friend,
    /// Community-contributed puzzle solution.
    Solution,
    /// Mailbox location.
    Mailbox,
}

impl MarkerCategory {
    /// All categories in catalog concatenation order.
    pub const ALL: [MarkerCategory; 4] = [
        MarkerCategory::Exhibit,
        MarkerCategory::Friend,
        MarkerCategory::Solution,
        MarkerCategory::Mailbox,
    ];

    /// Stable string id used in wire data and CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exhibit => "exhibit",
            Self::Friend => "friend",
            Self::Solution => "solution",
            Self::Mailbox => "mailbox",
        }
    }

    /// Parses a category from its string id (case-insensitive, plural allowed).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exhibit" | "exhibits" => Some(Self::Exhibit),
            "friend" | "friends" => Some(Self::Friend),
            "solution" | "solutions" => Some(Self::Solution),
            "mailbox" | "mailboxes" => Some(Self::Mailbox),
            _ => None,
        }
    }
}

impl Display for MarkerCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Point in the shared planar frame used by the map surface.
///
/// Serialized as `[row, column]` to match the display library's `[lat, lng]`
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct MapPosition {
    /// Vertical axis (derived from source `z`).
    pub row: f64,
    /// Horizontal axis (derived from source `x`).
    pub column: f64,
}

impl MapPosition {
    pub fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// Returns whether both axes are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.row.is_finite() && self.column.is_finite()
    }
}

impl From<[f64; 2]> for MapPosition {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<MapPosition> for [f64; 2] {
    fn from(value: MapPosition) -> Self {
        [value.row, value.column]
    }
}

/// Category-specific payload of a marker.
///
/// Serialized with a `type` tag so the flattened marker keeps the
/// `{ id, type, position, ... }` shape consumed by the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkerDetail {
    Exhibit {
        title: String,
        description: String,
    },
    Friend,
    Solution {
        solution_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        images: Option<Vec<String>>,
    },
    Mailbox,
}

impl MarkerDetail {
    pub fn category(&self) -> MarkerCategory {
        match self {
            Self::Exhibit { .. } => MarkerCategory::Exhibit,
            Self::Friend => MarkerCategory::Friend,
            Self::Solution { .. } => MarkerCategory::Solution,
            Self::Mailbox => MarkerCategory::Mailbox,
        }
    }
}

/// Positioned point of interest in the marker catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: MapPosition,
    #[serde(flatten)]
    pub detail: MarkerDetail,
}

impl Marker {
    pub fn exhibit(
        id: impl Into<String>,
        position: MapPosition,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            detail: MarkerDetail::Exhibit {
                title: title.into(),
                description: description.into(),
            },
        }
    }

    pub fn friend(id: impl Into<String>, position: MapPosition) -> Self {
        Self {
            id: id.into(),
            position,
            detail: MarkerDetail::Friend,
        }
    }

    pub fn solution(
        id: impl Into<String>,
        position: MapPosition,
        solution_text: impl Into<String>,
        images: Option<Vec<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            detail: MarkerDetail::Solution {
                solution_text: solution_text.into(),
                images,
            },
        }
    }

    pub fn mailbox(id: impl Into<String>, position: MapPosition) -> Self {
        Self {
            id: id.into(),
            position,
            detail: MarkerDetail::Mailbox,
        }
    }

    pub fn category(&self) -> MarkerCategory {
        self.detail.category()
    }

    /// Exhibit title; `None` for other categories.
    pub fn title(&self) -> Option<&str> {
        match &self.detail {
            MarkerDetail::Exhibit { title, .. } => Some(title.as_str()),
            _ => None,
        }
    }

    /// Exhibit description; `None` for other categories.
    pub fn description(&self) -> Option<&str> {
        match &self.detail {
            MarkerDetail::Exhibit { description, .. } => Some(description.as_str()),
            _ => None,
        }
    }

    /// Multi-line solution text; `None` for other categories.
    pub fn solution_text(&self) -> Option<&str> {
        match &self.detail {
            MarkerDetail::Solution { solution_text, .. } => Some(solution_text.as_str()),
            _ => None,
        }
    }

    /// Ordered solution image references; `None` when absent or not a solution.
    pub fn image_refs(&self) -> Option<&[String]> {
        match &self.detail {
            MarkerDetail::Solution {
                images: Some(images),
                ..
            } => Some(images.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MapPosition, Marker, MarkerCategory};

    #[test]
    fn category_parse_accepts_plural_and_case() {
        assert_eq!(MarkerCategory::parse("Friends"), Some(MarkerCategory::Friend));
        assert_eq!(MarkerCategory::parse(" mailbox "), Some(MarkerCategory::Mailbox));
        assert_eq!(MarkerCategory::parse("island"), None);
    }

    #[test]
    fn optional_fields_stay_with_their_category() {
        let friend = Marker::friend("bob", MapPosition::new(1.0, 2.0));
        assert_eq!(friend.title(), None);
        assert_eq!(friend.solution_text(), None);
        assert_eq!(friend.image_refs(), None);

        let exhibit = Marker::exhibit("lm1", MapPosition::new(1.0, 2.0), "Rock", "");
        assert_eq!(exhibit.title(), Some("Rock"));
        assert_eq!(exhibit.solution_text(), None);
    }
}
