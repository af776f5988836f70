//! Metadata of uploaded GPS traces.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::LatLon;

/// Who may see a GPS trace and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Visibility {
    /// Only the owner sees the trace; points appear anonymised and unordered.
    Private,
    /// Points appear anonymised but ordered with timestamps.
    Trackable,
    /// Points appear anonymised and unordered; the trace is listed publicly.
    Public,
    /// Everything, including the owner, is shown.
    Identifiable,
}

impl Visibility {
    /// Lower-case name used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Trackable => "trackable",
            Self::Public => "public",
            Self::Identifiable => "identifiable",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Visibility`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown trace visibility `{0}`")]
pub struct VisibilityError(pub String);

impl FromStr for Visibility {
    type Err = VisibilityError;

    /// Parse a visibility name, ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            Self::Private,
            Self::Trackable,
            Self::Public,
            Self::Identifiable,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| VisibilityError(value.to_owned()))
    }
}

/// Details of one uploaded GPS trace as listed by the API.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsTraceDetails {
    /// Trace identifier.
    pub id: i64,
    /// Original file name.
    pub name: Option<String>,
    /// Display name of the uploader.
    pub user_name: Option<String>,
    /// Visibility level.
    pub visibility: Visibility,
    /// Whether the server is still importing the trace.
    pub pending: bool,
    /// Position of the first point, when both coordinates are known.
    pub position: Option<LatLon>,
    /// Upload time.
    pub created_at: Option<DateTime<Utc>>,
    /// Free-text description.
    pub description: Option<String>,
    /// Tags in document order.
    pub tags: Vec<String>,
}

impl GpsTraceDetails {
    /// Details with only the required fields set.
    #[must_use]
    pub const fn new(id: i64, visibility: Visibility) -> Self {
        Self {
            id,
            name: None,
            user_name: None,
            visibility,
            pending: true,
            position: None,
            created_at: None,
            description: None,
            tags: Vec::new(),
        }
    }
}
