//! Core data model: markers, zones, and telemetry samples.
//!
//! A [`Zone`] is a contiguous, non-overlapping arc of the track's distance
//! coordinate — a marshal sector or a corner-approach/exit region. Zones are
//! immutable after construction except for two append-only collections:
//! `boundary_points` (the zone's observed spatial footprint) and `samples`
//! (per-sample features contributed by the sequential classifier).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One marker record from the circuit geometry provider.
///
/// Markers arrive ordered by increasing distance along the track and cover
/// one full lap. Marshal-sector markers carry only a boundary distance;
/// corner markers additionally carry the apex distance and corner number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker {
    /// Boundary distance along the track (meters).
    pub distance: f64,

    /// Apex distance for corner markers.
    pub apex: Option<f64>,

    /// Provider-assigned marker number, when present.
    pub number: Option<u32>,
}

impl Marker {
    /// Create a plain boundary marker (marshal sector).
    #[must_use]
    pub const fn boundary(distance: f64) -> Self {
        Self {
            distance,
            apex: None,
            number: None,
        }
    }

    /// Create a corner marker with an apex distance.
    #[must_use]
    pub const fn corner(distance: f64, apex: f64, number: u32) -> Self {
        Self {
            distance,
            apex: Some(apex),
            number: Some(number),
        }
    }
}

/// Origin of a telemetry sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleSource {
    /// Raw sensor measurement.
    #[default]
    Sensor,
    /// Synthetic point interpolated by the telemetry provider.
    Interpolation,
}

/// One telemetry sample from the lap stream, consumed read-only.
///
/// Arrival order is fixed; distance is assumed non-decreasing apart from
/// the single wrap at the end of the lap, but this is not enforced — the
/// sequential classifier reports samples it cannot place instead of
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetrySample {
    /// Distance along the track (meters).
    pub distance: f64,
    /// World X coordinate.
    pub x: f64,
    /// World Y coordinate.
    pub y: f64,
    /// Speed (km/h).
    pub speed: f64,
    /// Throttle application in percent, `[0, 100]`.
    pub throttle: f64,
    /// Selected gear.
    pub gear: i8,
    /// Whether the brake is applied.
    pub brake: bool,
    /// Raw sensor point or provider interpolation.
    pub source: SampleSource,
}

/// Per-zone feature record appended by the sequential classifier.
///
/// The distance coordinate is dropped after assignment; downstream
/// aggregation works on the feature channels and position only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneSample {
    /// Speed (km/h).
    pub speed: f64,
    /// Throttle application in percent.
    pub throttle: f64,
    /// Selected gear.
    pub gear: i8,
    /// Whether the brake is applied.
    pub brake: bool,
    /// World X coordinate.
    pub x: f64,
    /// World Y coordinate.
    pub y: f64,
}

impl From<&TelemetrySample> for ZoneSample {
    fn from(sample: &TelemetrySample) -> Self {
        Self {
            speed: sample.speed,
            throttle: sample.throttle,
            gear: sample.gear,
            brake: sample.brake,
            x: sample.x,
            y: sample.y,
        }
    }
}

/// A contiguous arc of the track's distance coordinate.
///
/// Built once per circuit by [`crate::builder`]; the boundary fields never
/// change afterwards. `end` may be numerically below `start` when the zone
/// wraps past the start/finish line — membership must go through
/// [`crate::LapMetric::in_window`], never plain comparison. On the final
/// corner zone of an extended build, `end` may exceed the track length by
/// the configured exit margin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zone {
    /// Position in the ordered zone sequence (1-based, stable).
    pub index: usize,

    /// Start distance, in `[0, track_length)`.
    pub start: f64,

    /// End distance. In `[0, track_length)` except on an extended final
    /// corner zone, where it is `track_length + exit_margin`.
    pub end: f64,

    /// Arc length: `(end - start)` mod track length, plus any exit margin
    /// on the final corner zone. Always positive.
    pub length: f64,

    /// Representative interior distance for corner zones. Informational;
    /// never used in membership tests.
    pub apex: Option<f64>,

    /// Observed `(x, y)` outline points inside this zone. Append-only,
    /// populated by the bulk window classifier.
    pub boundary_points: Vec<[f64; 2]>,

    /// Feature records contributed by the sequential classifier.
    /// Append-only.
    pub samples: Vec<ZoneSample>,
}

impl Zone {
    /// Create an empty zone with the given boundaries.
    #[must_use]
    pub fn new(index: usize, start: f64, end: f64, length: f64, apex: Option<f64>) -> Self {
        Self {
            index,
            start,
            end,
            length,
            apex,
            boundary_points: Vec::new(),
            samples: Vec::new(),
        }
    }

    /// Append an outline point to this zone's spatial footprint.
    ///
    /// Pure append: no transformation, no filtering.
    pub fn push_boundary_point(&mut self, point: [f64; 2]) {
        self.boundary_points.push(point);
    }

    /// Append a classified telemetry sample to this zone.
    ///
    /// Pure append: filtering of interpolated samples is the caller's
    /// responsibility, applied before this call.
    pub fn push_sample(&mut self, sample: ZoneSample) {
        self.samples.push(sample);
    }

    /// Number of accumulated outline points.
    #[must_use]
    pub fn boundary_point_count(&self) -> usize {
        self.boundary_points.len()
    }

    /// Number of accumulated samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
