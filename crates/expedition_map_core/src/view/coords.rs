//! Coordinate entry and cursor readout for the map surface.
//!
//! Players type and read positions as `x, y` (column first), while the map
//! surface addresses points as `(row, column)`.

use crate::model::marker::MapPosition;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Parsed "fly to" request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateQuery {
    pub target: MapPosition,
}

impl CoordinateQuery {
    /// Parses `x, y` into a map position.
    ///
    /// Requires exactly two comma-separated parts. Each part is read by its
    /// leading number, so `12px` is 12 and `px12` is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let parts: Vec<&str> = input.split(',').collect();
        if parts.len() != 2 {
            return None;
        }
        let x = leading_number(parts[0])?;
        let y = leading_number(parts[1])?;
        Some(Self {
            target: MapPosition::new(y, x),
        })
    }
}

fn leading_number(raw: &str) -> Option<f64> {
    let matched = LEADING_NUMBER_RE.find(raw.trim())?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Formats a position as the `x, y` readout shown under the cursor.
pub fn format_cursor(position: MapPosition) -> String {
    format!(
        "{}, {}",
        round_half_up(position.column),
        round_half_up(position.row)
    )
}

/// Rounds toward positive infinity on ties (`-2.5` -> `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
