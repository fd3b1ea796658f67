//! Zone construction from circuit geometry markers.
//!
//! Two modes, matching the two marker kinds a circuit provides:
//!
//! - **Boundary mode** ([`build_marshal_zones`]): marker distances *are* the
//!   zone boundaries. Zone i spans `[d_i, d_{i+1})`; the final zone wraps
//!   through the start/finish line back to the first marker.
//! - **Apex mode** ([`build_corner_zones`]): markers carry corner apex
//!   distances; the boundary between two corners is the midpoint of their
//!   apexes. The first corner starts at 0, the last ends at the track
//!   length (plus the configured exit margin, if any).
//!
//! Both modes validate the contiguity and coverage invariants before
//! returning; on any error no partial zone list is produced.

use crate::config::PartitionConfig;
use crate::error::{Result, ZoneError};
use crate::metric::LapMetric;
use crate::zone::{Marker, Zone};

/// Tolerance for the coverage-sum check, in meters.
const COVERAGE_EPS: f64 = 1e-6;

/// Build marshal-sector zones from ordered boundary markers.
///
/// Zone i spans `[d_i, d_{i+1})` for i < N; zone N spans `[d_N, d_1)`
/// wrapping through the track length. A single marker yields one zone
/// covering the whole lap.
///
/// # Errors
///
/// - [`ZoneError::TooFewMarkers`] if no markers are supplied.
/// - [`ZoneError::UnorderedMarkers`] if distances are not strictly
///   increasing.
/// - [`ZoneError::DegenerateZone`] if two adjacent markers coincide.
/// - [`ZoneError::MarkerOutOfRange`] if a distance falls outside
///   `[0, track_length)`.
/// - [`ZoneError::InvalidConfig`] if an exit margin is configured —
///   the margin is a corner-zone policy; accepting it here while the
///   classifier reserves the last `margin` meters would open a silent
///   coverage gap.
/// - [`ZoneError::CoverageMismatch`] if the result does not tile the lap.
pub fn build_marshal_zones(
    markers: &[Marker],
    metric: &LapMetric,
    config: &PartitionConfig,
) -> Result<Vec<Zone>> {
    config.validate()?;
    if config.exit_margin != 0.0 {
        return Err(ZoneError::invalid_config(
            "exit_margin applies to corner zones only",
        ));
    }
    check_ordering(markers)?;
    check_range(markers.iter().map(|m| m.distance), metric)?;

    let n = markers.len();
    let mut zones = Vec::with_capacity(n);

    for (i, marker) in markers.iter().enumerate() {
        let start = marker.distance;
        let end = markers[(i + 1) % n].distance;
        let length = if n == 1 {
            metric.track_length()
        } else {
            metric.wrapped_delta(start, end)
        };
        zones.push(Zone::new(i + 1, start, end, length, None));
    }

    validate_coverage(&zones, metric, 0.0)?;
    Ok(zones)
}

/// Build corner zones from ordered apex markers.
///
/// The boundary between corner i and corner i+1 is the midpoint of their
/// apex distances. The first corner starts at 0; the last ends at the
/// track length plus `config.exit_margin`. Markers without an explicit
/// `apex` use their `distance` as the apex, matching providers that report
/// corners by apex distance alone.
///
/// # Errors
///
/// Same marker failure modes as [`build_marshal_zones`] (too few,
/// unordered, degenerate, out of range — applied to the apex distances).
/// Unlike the marshal builder this mode accepts a nonzero exit margin;
/// the coverage check then expects `track_length + exit_margin`.
pub fn build_corner_zones(
    markers: &[Marker],
    metric: &LapMetric,
    config: &PartitionConfig,
) -> Result<Vec<Zone>> {
    config.validate()?;
    if markers.is_empty() {
        return Err(ZoneError::too_few_markers(1, 0));
    }

    let apexes: Vec<f64> = markers
        .iter()
        .map(|m| m.apex.unwrap_or(m.distance))
        .collect();

    for (i, pair) in apexes.windows(2).enumerate() {
        if pair[1] == pair[0] {
            return Err(ZoneError::degenerate_zone(i + 1, pair[1]));
        }
        if pair[1] < pair[0] {
            return Err(ZoneError::unordered_markers(i + 1));
        }
    }
    // An apex at or past the track length would push a midpoint boundary
    // beyond the lap and leave the final zone with negative length, which
    // the telescoping coverage sum alone cannot catch.
    check_range(apexes.iter().copied(), metric)?;

    let n = apexes.len();
    let mut zones = Vec::with_capacity(n);
    let mut start = 0.0;

    for (i, &apex) in apexes.iter().enumerate() {
        let end = if i + 1 < n {
            apex + (apexes[i + 1] - apex) / 2.0
        } else {
            metric.track_length() + config.exit_margin
        };
        zones.push(Zone::new(i + 1, start, end, end - start, Some(apex)));
        start = end;
    }

    validate_coverage(&zones, metric, config.exit_margin)?;
    Ok(zones)
}

fn check_range(distances: impl Iterator<Item = f64>, metric: &LapMetric) -> Result<()> {
    for (i, distance) in distances.enumerate() {
        if !(0.0..metric.track_length()).contains(&distance) {
            return Err(ZoneError::marker_out_of_range(
                i + 1,
                distance,
                metric.track_length(),
            ));
        }
    }
    Ok(())
}

fn check_ordering(markers: &[Marker]) -> Result<()> {
    if markers.is_empty() {
        return Err(ZoneError::too_few_markers(1, 0));
    }
    for (i, pair) in markers.windows(2).enumerate() {
        if pair[1].distance == pair[0].distance {
            return Err(ZoneError::degenerate_zone(i + 1, pair[1].distance));
        }
        if pair[1].distance < pair[0].distance {
            return Err(ZoneError::unordered_markers(i + 1));
        }
    }
    Ok(())
}

/// Check the contiguity and coverage invariants on a built zone list.
///
/// Adjacent zones must share a boundary and the lengths must sum to the
/// track length plus the exit margin, within [`COVERAGE_EPS`].
fn validate_coverage(zones: &[Zone], metric: &LapMetric, exit_margin: f64) -> Result<()> {
    let expected = metric.track_length() + exit_margin;
    let total: f64 = zones.iter().map(|z| z.length).sum();
    if (total - expected).abs() > COVERAGE_EPS {
        return Err(ZoneError::coverage_mismatch(expected, total));
    }

    for pair in zones.windows(2) {
        if metric.wrapped_delta(pair[0].end, pair[1].start) > COVERAGE_EPS {
            return Err(ZoneError::coverage_mismatch(expected, total));
        }
    }
    Ok(())
}
