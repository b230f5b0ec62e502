//! Save file import and completion stats extraction.
//!
//! # Responsibility
//! - Parse an uploaded save file and validate its `profile` field.
//! - Derive the three completion counts from the profile.
//!
//! # Invariants
//! - Only `profile` is required; missing or non-array sub-fields count as empty.
//! - Failure never yields partial stats.
//! - Save contents are never logged, only derived counts.

use crate::model::stats::StatsResult;
use log::{info, warn};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const UTF8_BOM: char = '\u{feff}';

/// Save import failure surfaced to the player.
#[derive(Debug)]
pub enum SaveImportError {
    /// Input is not well-formed JSON.
    Parse(serde_json::Error),
    /// JSON is well-formed but lacks the `profile` object.
    Validation(SaveValidationError),
}

/// Shape violations of a well-formed save document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveValidationError {
    MissingProfile,
}

impl SaveImportError {
    /// Short message suitable for the stats display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Failed to parse save file",
            Self::Validation(SaveValidationError::MissingProfile) => {
                "Invalid save file: missing profile data"
            }
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for SaveValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProfile => write!(f, "missing profile data"),
        }
    }
}

impl Error for SaveValidationError {}

impl Display for SaveImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

impl Error for SaveImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SaveImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<SaveValidationError> for SaveImportError {
    fn from(value: SaveValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Completion-relevant subset of the save's `profile` object.
///
/// Element types are irrelevant; only length and equality matter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfile {
    #[serde(default, deserialize_with = "lenient_sequence")]
    pub exhibits_viewed: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_sequence")]
    pub hugged_friends: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_sequence")]
    pub islands_visited: Vec<Value>,
}

impl SaveProfile {
    /// Extracts the profile from a parsed save document.
    ///
    /// # Errors
    /// - `SaveValidationError::MissingProfile` when `profile` is absent, null
    ///   or not an object (including non-object documents).
    pub fn from_document(document: Value) -> Result<Self, SaveValidationError> {
        let profile = match document {
            Value::Object(mut fields) => fields.remove("profile"),
            _ => None,
        };
        match profile {
            Some(profile @ Value::Object(_)) => {
                // Every field is lenient, so an object always deserializes.
                Ok(Self::deserialize(profile).unwrap_or_default())
            }
            _ => Err(SaveValidationError::MissingProfile),
        }
    }

    pub fn stats(&self) -> StatsResult {
        StatsResult {
            exhibits_viewed_count: self.exhibits_viewed.len(),
            hugged_friends_count: self.hugged_friends.len(),
            unique_islands_visited_count: count_distinct(&self.islands_visited),
        }
    }
}

fn lenient_sequence<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

/// Counts distinct values; numbers compare by numeric value.
fn count_distinct(values: &[Value]) -> usize {
    values.iter().map(identity_key).collect::<HashSet<_>>().len()
}

fn identity_key(value: &Value) -> String {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float) if float == 0.0 => "n:0".to_string(),
            Some(float) => format!("n:{float}"),
            None => format!("n:{number}"),
        },
        other => format!("v:{other}"),
    }
}

/// Computes completion stats from the save file's text.
///
/// # Errors
/// - `SaveImportError::Parse` when the text is not well-formed JSON.
/// - `SaveImportError::Validation` when `profile` is missing.
pub fn compute_stats(text: &str) -> Result<StatsResult, SaveImportError> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let result = serde_json::from_str::<Value>(text)
        .map_err(SaveImportError::from)
        .and_then(|document| Ok(SaveProfile::from_document(document)?.stats()));

    match &result {
        Ok(stats) => info!(
            "event=save_import module=save status=ok exhibits_viewed={} hugged_friends={} islands_visited={}",
            stats.exhibits_viewed_count,
            stats.hugged_friends_count,
            stats.unique_islands_visited_count
        ),
        Err(err) => warn!(
            "event=save_import module=save status=error kind={} input_bytes={}",
            if err.is_parse() { "parse" } else { "validation" },
            text.len()
        ),
    }
    result
}

/// Computes completion stats from raw file bytes.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so a mangled
/// file surfaces as a parse failure.
pub fn compute_stats_from_bytes(bytes: &[u8]) -> Result<StatsResult, SaveImportError> {
    compute_stats(&String::from_utf8_lossy(bytes))
}
