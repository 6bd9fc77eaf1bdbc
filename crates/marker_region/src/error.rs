// crates/marker_region/src/error.rs

use std::fmt;
use thiserror::Error;

/// Which of the two markers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Start => f.write_str("start"),
            MarkerKind::End => f.write_str("end"),
        }
    }
}

/// Failure to locate a region. The missing marker text is carried along so
/// callers can print a precise diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("start marker not found: {0:?}")]
    StartMarkerNotFound(String),

    /// The end marker does not occur at or after the start marker.
    #[error("end marker not found after start marker: {0:?}")]
    EndMarkerNotFound(String),

    #[error("{0} marker must not be empty")]
    EmptyMarker(MarkerKind),
}

impl MarkerError {
    /// Returns the marker this error is about.
    pub fn kind(&self) -> MarkerKind {
        match self {
            MarkerError::StartMarkerNotFound(_) => MarkerKind::Start,
            MarkerError::EndMarkerNotFound(_) => MarkerKind::End,
            MarkerError::EmptyMarker(kind) => *kind,
        }
    }
}
