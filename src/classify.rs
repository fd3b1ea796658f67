//! Telemetry-to-zone classification.
//!
//! Two strategies over the same ordered zone list:
//!
//! - [`classify_outline`] — one-shot bulk pass assigning a lap's outline
//!   points by modular-window membership, populating each zone's spatial
//!   footprint.
//! - [`SequentialClassifier`] — stateful cursor walk over an ordered
//!   telemetry stream, probing only the current and next zone per sample
//!   and reporting anything it cannot place instead of guessing.
//!
//! A third, per-sample nearest-point variant ([`classify_nearest`]) is for
//! streams where the distance channel is unreliable: each sample goes to
//! the zone whose accumulated outline is spatially closest.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PartitionConfig;
use crate::metric::LapMetric;
use crate::spatial::{BruteForceIndex, SpatialIndex};
use crate::zone::{SampleSource, TelemetrySample, Zone, ZoneSample};

/// Outcome of classifying a single telemetry sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// Sample appended to the zone at this index (0-based).
    Assigned(usize),
    /// No zone matched under the active policy; nothing was appended.
    Unmatched,
}

/// Diagnostics from a classification run.
///
/// Unmatched samples are counted and listed by input index, never
/// silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassificationReport {
    /// Samples appended to a zone.
    pub assigned: usize,

    /// Interpolated samples skipped by the `exclude_interpolated` policy.
    pub filtered: usize,

    /// Input indices of samples that matched no zone.
    pub unmatched: Vec<usize>,
}

impl ClassificationReport {
    /// Number of samples that matched no zone.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Whether every non-filtered sample found a zone.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Membership test for one zone, applying the closing-point and
/// exit-margin rules on the final zone.
///
/// A closing-point distance (exactly the track length) belongs to the
/// last zone *alone*: without the early return it would also wrap to zero
/// and satisfy the first zone's window, appending the lap's final point
/// twice. The exit margin covers raw distances past the finish line only;
/// it is excluded from the wrapped window so on-lap windows stay disjoint.
fn zone_contains(
    zone: &Zone,
    distance: f64,
    is_last: bool,
    metric: &LapMetric,
    config: &PartitionConfig,
) -> bool {
    if config.closing_point && distance == metric.track_length() {
        return is_last;
    }
    if config.exit_margin > 0.0 {
        // A raw distance past the finish line belongs to the extended
        // tail or nowhere; letting it wrap would also match zone 1.
        if distance >= metric.track_length() {
            return is_last && distance < zone.end;
        }
        if is_last {
            let window = zone.length - config.exit_margin.min(zone.length);
            return metric.in_window(distance, zone.start, window);
        }
    }
    metric.in_window(distance, zone.start, zone.length)
}

/// Bulk-classify a lap's outline points into the zones' spatial footprints.
///
/// Each `(distance, x, y)` point is tested against every zone and its
/// `(x, y)` appended to each zone whose window contains it — exactly one,
/// since windows are disjoint by construction; a boundary tie at the lap's
/// closing point is resolved by the configured closing-point rule. Points
/// matching no zone are ignored here (the outline is dense and
/// well-ordered; diagnostics belong to the sequential pass).
pub fn classify_outline(
    zones: &mut [Zone],
    points: &[(f64, f64, f64)],
    metric: &LapMetric,
    config: &PartitionConfig,
) {
    let last = zones.len().saturating_sub(1);
    for &(distance, x, y) in points {
        for (i, zone) in zones.iter_mut().enumerate() {
            if zone_contains(zone, distance, i == last, metric, config) {
                zone.push_boundary_point([x, y]);
            }
        }
    }
}

/// Stateful cursor-based classifier for an ordered telemetry stream.
///
/// The cursor starts at the first zone and only ever moves forward, one
/// zone at a time. Per sample:
///
/// 1. the current zone is probed; a match appends and leaves the cursor;
/// 2. at the last zone, a non-match is reported unmatched — there is no
///    backward search;
/// 3. otherwise only the *next* zone is probed; a match advances the
///    cursor, a miss is reported and the cursor stays.
///
/// This one-ahead policy assumes distances are non-decreasing except for
/// the single wrap at the end of a lap. A sample whose distance regresses
/// further (noisy sensors, multi-lap input) is reported as unmatched
/// rather than assigned by guesswork.
#[derive(Debug, Clone)]
pub struct SequentialClassifier {
    metric: LapMetric,
    config: PartitionConfig,
    cursor: usize,
}

impl SequentialClassifier {
    /// Create a classifier with its cursor at the first zone.
    #[must_use]
    pub const fn new(metric: LapMetric, config: PartitionConfig) -> Self {
        Self {
            metric,
            config,
            cursor: 0,
        }
    }

    /// Index of the zone the cursor currently points at (0-based).
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reset the cursor to the first zone for a fresh lap.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Classify one sample, appending it to the matched zone.
    ///
    /// Interpolation filtering is not applied here; use [`Self::run`] for
    /// the policy-aware stream pass.
    pub fn assign(&mut self, zones: &mut [Zone], sample: &TelemetrySample) -> Assignment {
        let last = zones.len().saturating_sub(1);

        let current_match = zones.get(self.cursor).is_some_and(|zone| {
            zone_contains(
                zone,
                sample.distance,
                self.cursor == last,
                &self.metric,
                &self.config,
            )
        });
        if current_match {
            zones[self.cursor].push_sample(ZoneSample::from(sample));
            return Assignment::Assigned(self.cursor);
        }

        if self.cursor >= last {
            // Terminal fallback: never search backward.
            return Assignment::Unmatched;
        }

        let next = self.cursor + 1;
        let next_match = zone_contains(
            &zones[next],
            sample.distance,
            next == last,
            &self.metric,
            &self.config,
        );
        if next_match {
            self.cursor = next;
            zones[next].push_sample(ZoneSample::from(sample));
            Assignment::Assigned(next)
        } else {
            Assignment::Unmatched
        }
    }

    /// Classify an ordered stream of samples into the zones.
    ///
    /// Applies the `exclude_interpolated` policy before appending and
    /// collects per-run diagnostics.
    pub fn run(
        &mut self,
        zones: &mut [Zone],
        samples: &[TelemetrySample],
    ) -> ClassificationReport {
        let mut report = ClassificationReport::default();
        for (i, sample) in samples.iter().enumerate() {
            if self.config.exclude_interpolated && sample.source == SampleSource::Interpolation {
                report.filtered += 1;
                continue;
            }
            match self.assign(zones, sample) {
                Assignment::Assigned(_) => report.assigned += 1,
                Assignment::Unmatched => report.unmatched.push(i),
            }
        }
        report
    }
}

/// Assign each sample to the zone whose accumulated outline is nearest.
///
/// Per-sample, stateless: no cursor. Intended for small sample counts
/// where the distance channel is unreliable (positional drift) — cost is
/// O(zones × outline points) per sample. Ties break to the lowest zone
/// index; zones with empty outlines query to infinity and so never win
/// against a populated one. A sample is unmatched only when every zone's
/// outline is empty.
pub fn classify_nearest(
    zones: &mut [Zone],
    samples: &[TelemetrySample],
    config: &PartitionConfig,
) -> ClassificationReport {
    let mut report = ClassificationReport::default();

    for (i, sample) in samples.iter().enumerate() {
        if config.exclude_interpolated && sample.source == SampleSource::Interpolation {
            report.filtered += 1;
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (zi, zone) in zones.iter().enumerate() {
            let d = BruteForceIndex::for_zone(zone).nearest_distance([sample.x, sample.y]);
            if d.is_finite() && best.is_none_or(|(_, bd)| d < bd) {
                best = Some((zi, d));
            }
        }

        match best {
            Some((zi, _)) => {
                zones[zi].push_sample(ZoneSample::from(sample));
                report.assigned += 1;
            }
            None => report.unmatched.push(i),
        }
    }
    report
}
