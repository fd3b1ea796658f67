//! Track-length-aware modular arithmetic over the lap distance coordinate.
//!
//! A racetrack is a closed loop: the distance coordinate resets from the
//! track length back to zero at the start/finish line. [`LapMetric`] wraps
//! that arithmetic so zone membership works across the wrap, where plain
//! numeric comparison would fail.
//!
//! # Example
//!
//! ```
//! use track_zones::LapMetric;
//!
//! let metric = LapMetric::new(1000.0)?;
//!
//! // A zone spanning [900, 100) wraps past the start/finish line.
//! assert!(metric.in_window(950.0, 900.0, 200.0));
//! assert!(metric.in_window(50.0, 900.0, 200.0));
//! assert!(!metric.in_window(500.0, 900.0, 200.0));
//! # Ok::<(), track_zones::ZoneError>(())
//! ```

use crate::error::{Result, ZoneError};

/// Modular distance arithmetic for one circuit.
///
/// All deltas are taken mod the track length and land in
/// `[0, track_length)`. This is the only membership predicate in the crate;
/// no caller compares distance ranges directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapMetric {
    track_length: f64,
}

impl LapMetric {
    /// Create a metric for a circuit of the given length (meters).
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidTrackLength`] if the length is not
    /// positive and finite.
    pub fn new(track_length: f64) -> Result<Self> {
        if !track_length.is_finite() || track_length <= 0.0 {
            return Err(ZoneError::invalid_track_length(track_length));
        }
        Ok(Self { track_length })
    }

    /// The circuit length this metric wraps at.
    #[must_use]
    pub const fn track_length(&self) -> f64 {
        self.track_length
    }

    /// Forward distance from `from` to `to` along the lap, in
    /// `[0, track_length)`.
    ///
    /// `rem_euclid` alone can return exactly `track_length` when the raw
    /// delta is a tiny negative value, so the result is folded once more.
    #[must_use]
    pub fn wrapped_delta(&self, from: f64, to: f64) -> f64 {
        let delta = (to - from).rem_euclid(self.track_length);
        if delta >= self.track_length {
            delta - self.track_length
        } else {
            delta
        }
    }

    /// Whether `distance` lies in the window `[start, start + length)`
    /// taken mod the track length.
    ///
    /// A point exactly at `start + length` is *outside*: boundary points
    /// belong to the following zone. The closing-point exception for the
    /// final zone is applied by the classifiers, not here.
    #[must_use]
    pub fn in_window(&self, distance: f64, start: f64, length: f64) -> bool {
        self.wrapped_delta(start, distance) < length
    }
}
