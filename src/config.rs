//! Configuration for zone construction and classification.
//!
//! [`PartitionConfig`] centralizes the policy knobs: the closing-point rule
//! for the final zone, the optional post-apex exit margin for corner zones,
//! and whether provider-interpolated telemetry is aggregated.
//!
//! # Example
//!
//! ```
//! use track_zones::PartitionConfig;
//!
//! // Marshal-sector defaults
//! let config = PartitionConfig::marshal_sectors();
//!
//! // Corner zones with a 20 m exit extension past the finish line
//! let extended = PartitionConfig::corner_zones().with_exit_margin(20.0);
//! ```

use crate::error::{Result, ZoneError};

/// Policy configuration for zone building and telemetry classification.
///
/// # Coverage invariant
///
/// With `exit_margin == 0.0` (the default) the built zones tile
/// `[0, track_length)` exactly once. A nonzero margin extends the *last*
/// corner zone's raw span to `track_length + exit_margin`; the extension
/// captures raw distances past the finish line only and is excluded from
/// the wrapped membership window, so zones on the lap itself stay disjoint.
/// Validation then expects raw lengths to sum to
/// `track_length + exit_margin`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionConfig {
    /// Assign a raw distance exactly equal to the track length to the
    /// final zone instead of wrapping it into the first.
    ///
    /// Telemetry providers emit the lap's closing point at
    /// `distance == track_length`; without this rule it would wrap to 0 and
    /// land in zone 1.
    pub closing_point: bool,

    /// Extra raw distance (meters) appended to the last corner zone past
    /// the finish line, capturing post-apex braking/exit data. Default 0.
    ///
    /// Corner-zone policy only: [`crate::build_marshal_zones`] rejects a
    /// nonzero margin, since marshal sectors tile the lap exactly and the
    /// classifier would otherwise reserve the last `margin` meters for an
    /// extension that does not exist.
    pub exit_margin: f64,

    /// Skip provider-interpolated samples during sequential aggregation.
    ///
    /// Interpolated points carry synthetic positions; excluding them keeps
    /// per-zone statistics on raw sensor data only.
    pub exclude_interpolated: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            closing_point: true,
            exit_margin: 0.0,
            exclude_interpolated: false,
        }
    }
}

impl PartitionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidConfig`] if any parameter is out of
    /// valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.exit_margin.is_finite() {
            return Err(ZoneError::invalid_config("exit_margin must be finite"));
        }
        if self.exit_margin < 0.0 {
            return Err(ZoneError::invalid_config(
                "exit_margin must be non-negative",
            ));
        }
        Ok(())
    }

    /// Preset for marshal-sector partitioning.
    ///
    /// Keeps the closing-point rule on, matching circuit data where the
    /// final sector owns the lap's last telemetry point.
    #[must_use]
    pub fn marshal_sectors() -> Self {
        Self::default()
    }

    /// Preset for corner-zone partitioning with no exit extension.
    ///
    /// Preserves the zones-sum-to-track-length invariant.
    #[must_use]
    pub fn corner_zones() -> Self {
        Self {
            exit_margin: 0.0,
            ..Self::default()
        }
    }

    /// Set the closing-point rule.
    #[must_use]
    pub const fn with_closing_point(mut self, closing_point: bool) -> Self {
        self.closing_point = closing_point;
        self
    }

    /// Set the post-apex exit margin.
    #[must_use]
    pub const fn with_exit_margin(mut self, margin: f64) -> Self {
        self.exit_margin = margin;
        self
    }

    /// Set whether interpolated samples are excluded from aggregation.
    #[must_use]
    pub const fn with_exclude_interpolated(mut self, exclude: bool) -> Self {
        self.exclude_interpolated = exclude;
        self
    }
}
