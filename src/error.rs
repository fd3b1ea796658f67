//! Error types for zone construction and classification.
//!
//! Construction errors are fatal: no partial zone list is ever returned.
//! Classification misses are *not* errors — they are surfaced through
//! [`crate::classify::ClassificationReport`] so callers can diagnose them.

use thiserror::Error;

/// Main error type for track zone operations.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// Track length must be positive and finite.
    #[error("Invalid track length: {value} (must be positive and finite)")]
    InvalidTrackLength { value: f64 },

    /// Not enough markers to define at least one zone.
    #[error("Too few markers: need at least {min}, got {actual}")]
    TooFewMarkers { min: usize, actual: usize },

    /// Two adjacent markers share a distance, producing a zero-length zone.
    #[error("Degenerate zone at marker {index}: repeated distance {distance}")]
    DegenerateZone { index: usize, distance: f64 },

    /// Marker distances are not strictly increasing.
    #[error("Markers out of order at index {index}")]
    UnorderedMarkers { index: usize },

    /// A marker distance lies outside the lap's distance range.
    #[error("Marker {index} out of range: distance {distance} not in [0, {track_length})")]
    MarkerOutOfRange {
        index: usize,
        distance: f64,
        track_length: f64,
    },

    /// Built zones do not cover the track exactly once.
    #[error("Coverage mismatch: zone lengths sum to {actual}, expected {expected}")]
    CoverageMismatch { expected: f64, actual: f64 },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for track zone operations.
pub type Result<T> = std::result::Result<T, ZoneError>;

impl ZoneError {
    /// Create an invalid track length error.
    #[must_use]
    pub const fn invalid_track_length(value: f64) -> Self {
        Self::InvalidTrackLength { value }
    }

    /// Create a too-few-markers error.
    #[must_use]
    pub const fn too_few_markers(min: usize, actual: usize) -> Self {
        Self::TooFewMarkers { min, actual }
    }

    /// Create a degenerate zone error.
    #[must_use]
    pub const fn degenerate_zone(index: usize, distance: f64) -> Self {
        Self::DegenerateZone { index, distance }
    }

    /// Create an unordered markers error.
    #[must_use]
    pub const fn unordered_markers(index: usize) -> Self {
        Self::UnorderedMarkers { index }
    }

    /// Create a marker out of range error.
    #[must_use]
    pub const fn marker_out_of_range(index: usize, distance: f64, track_length: f64) -> Self {
        Self::MarkerOutOfRange {
            index,
            distance,
            track_length,
        }
    }

    /// Create a coverage mismatch error.
    #[must_use]
    pub const fn coverage_mismatch(expected: f64, actual: f64) -> Self {
        Self::CoverageMismatch { expected, actual }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
