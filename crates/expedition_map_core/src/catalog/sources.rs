//! Static marker source documents.
//!
//! # Responsibility
//! - Describe the four independently authored JSON data sets.
//! - Load them from strings or from a data directory.
//!
//! # Invariants
//! - Landmark coordinates are read leniently; filtering happens in the builder.
//! - An entry that does not match its record shape is skipped and counted;
//!   only a broken top-level document shape fails loading.
//! - A load failure names the source that failed.

use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LANDMARKS_FILE: &str = "LM_coordinates.json";
pub const FRIENDS_FILE: &str = "friend_coordinates.json";
pub const SOLUTIONS_FILE: &str = "solutions.json";
pub const MAILBOXES_FILE: &str = "mailbox_coordinates.json";

/// One landmark (exhibit) entry.
///
/// `x`/`z` stay untyped so a malformed coordinate only drops that entry
/// instead of rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LandmarkRecord {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub z: Option<Value>,
}

impl LandmarkRecord {
    /// Returns `(x, z)` when both are finite numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let x = finite_number(self.x.as_ref())?;
        let z = finite_number(self.z.as_ref())?;
        Some((x, z))
    }
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|number| number.is_finite())
}

/// Named point used by friend and mailbox documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub x: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SolutionCoordinates {
    pub x: f64,
    pub z: f64,
}

/// One community solution entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolutionRecord {
    pub coordinates: SolutionCoordinates,
    #[serde(default)]
    pub solution_text: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct LandmarksDocument {
    landmarks: Vec<Value>,
}

#[derive(Deserialize)]
struct FriendsDocument {
    friends: Vec<Value>,
}

#[derive(Deserialize)]
struct MailboxesDocument {
    mailboxes: Vec<Value>,
}

/// Which of the four documents an entry or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Landmarks,
    Friends,
    Solutions,
    Mailboxes,
}

impl SourceKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Landmarks => LANDMARKS_FILE,
            Self::Friends => FRIENDS_FILE,
            Self::Solutions => SOLUTIONS_FILE,
            Self::Mailboxes => MAILBOXES_FILE,
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Landmarks => "landmarks",
            Self::Friends => "friends",
            Self::Solutions => "solutions",
            Self::Mailboxes => "mailboxes",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub enum CatalogLoadError {
    Io {
        source_kind: SourceKind,
        path: PathBuf,
        err: std::io::Error,
    },
    Parse {
        source_kind: SourceKind,
        err: serde_json::Error,
    },
}

impl Display for CatalogLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                source_kind,
                path,
                err,
            } => write!(
                f,
                "failed to read {source_kind} data `{}`: {err}",
                path.display()
            ),
            Self::Parse { source_kind, err } => {
                write!(f, "failed to parse {source_kind} data: {err}")
            }
        }
    }
}

impl Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            Self::Parse { err, .. } => Some(err),
        }
    }
}

/// The four raw input collections consumed by the catalog builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSources {
    pub landmarks: Vec<LandmarkRecord>,
    pub friends: Vec<PointRecord>,
    pub solutions: Vec<SolutionRecord>,
    pub mailboxes: Vec<PointRecord>,
    /// Entries skipped because they did not match their record shape.
    pub rejected_entries: usize,
}

impl CatalogSources {
    /// Parses the four documents from their JSON text.
    ///
    /// Malformed individual entries are skipped and counted in
    /// `rejected_entries`.
    ///
    /// # Errors
    /// - Returns `CatalogLoadError::Parse` naming the first document whose
    ///   top-level shape does not match.
    pub fn from_json(
        landmarks: &str,
        friends: &str,
        solutions: &str,
        mailboxes: &str,
    ) -> Result<Self, CatalogLoadError> {
        let landmarks: LandmarksDocument = parse(SourceKind::Landmarks, landmarks)?;
        let friends: FriendsDocument = parse(SourceKind::Friends, friends)?;
        let solutions: Vec<Value> = parse(SourceKind::Solutions, solutions)?;
        let mailboxes: MailboxesDocument = parse(SourceKind::Mailboxes, mailboxes)?;

        let mut rejected_entries = 0;
        Ok(Self {
            landmarks: collect_entries(
                SourceKind::Landmarks,
                landmarks.landmarks,
                &mut rejected_entries,
            ),
            friends: collect_entries(SourceKind::Friends, friends.friends, &mut rejected_entries),
            solutions: collect_entries(SourceKind::Solutions, solutions, &mut rejected_entries),
            mailboxes: collect_entries(
                SourceKind::Mailboxes,
                mailboxes.mailboxes,
                &mut rejected_entries,
            ),
            rejected_entries,
        })
    }

    /// Loads the four documents from `dir` using their fixed file names.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogLoadError> {
        let landmarks = read_source(dir, SourceKind::Landmarks)?;
        let friends = read_source(dir, SourceKind::Friends)?;
        let solutions = read_source(dir, SourceKind::Solutions)?;
        let mailboxes = read_source(dir, SourceKind::Mailboxes)?;

        let sources = Self::from_json(&landmarks, &friends, &solutions, &mailboxes)?;
        info!(
            "event=catalog_load module=catalog status=ok dir={} landmarks={} friends={} solutions={} mailboxes={} rejected={}",
            dir.display(),
            sources.landmarks.len(),
            sources.friends.len(),
            sources.solutions.len(),
            sources.mailboxes.len(),
            sources.rejected_entries
        );
        Ok(sources)
    }
}

fn parse<T: for<'de> Deserialize<'de>>(
    source_kind: SourceKind,
    text: &str,
) -> Result<T, CatalogLoadError> {
    serde_json::from_str(text).map_err(|err| CatalogLoadError::Parse { source_kind, err })
}

fn collect_entries<T: DeserializeOwned>(
    source_kind: SourceKind,
    entries: Vec<Value>,
    rejected: &mut usize,
) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                *rejected += 1;
                debug!(
                    "event=catalog_load module=catalog status=skipped source={} index={} reason={}",
                    source_kind, index, err
                );
                None
            }
        })
        .collect()
}

fn read_source(dir: &Path, source_kind: SourceKind) -> Result<String, CatalogLoadError> {
    let path = dir.join(source_kind.file_name());
    std::fs::read_to_string(&path).map_err(|err| {
        error!(
            "event=catalog_load module=catalog status=error source={} path={}",
            source_kind,
            path.display()
        );
        CatalogLoadError::Io {
            source_kind,
            path,
            err,
        }
    })
}
