//! Per-zone statistics over classified telemetry.
//!
//! Once a lap has been classified, each zone's sample collection reduces
//! to a small set of channel statistics for downstream comparison and
//! display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Aggregated channel statistics for one zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneSummary {
    /// Zone index this summary was computed for (1-based).
    pub zone_index: usize,

    /// Number of samples aggregated.
    pub sample_count: usize,

    /// Mean speed (km/h).
    pub mean_speed: f64,

    /// Maximum speed (km/h).
    pub max_speed: f64,

    /// Minimum speed (km/h).
    pub min_speed: f64,

    /// Mean throttle application in percent.
    pub mean_throttle: f64,

    /// Fraction of samples with the brake applied, `[0, 1]`.
    pub braking_fraction: f64,

    /// Most frequent gear across the zone's samples. Count ties break to
    /// the lowest gear; reverse (negative) gears are counted separately
    /// from neutral.
    pub dominant_gear: i8,
}

impl ZoneSummary {
    /// Summarize a zone's accumulated samples.
    ///
    /// Returns `None` for a zone with no samples: an empty zone has no
    /// meaningful statistics and callers comparing zones should skip it.
    #[must_use]
    pub fn from_zone(zone: &Zone) -> Option<Self> {
        if zone.samples.is_empty() {
            return None;
        }
        let n = zone.samples.len() as f64;

        let mut speed_sum = 0.0;
        let mut max_speed = f64::NEG_INFINITY;
        let mut min_speed = f64::INFINITY;
        let mut throttle_sum = 0.0;
        let mut brake_count = 0usize;
        // Gears span a handful of values; a fixed histogram beats a map.
        // Slots are offset by GEAR_OFFSET so reverse gets its own slot
        // below neutral.
        const GEAR_OFFSET: i16 = 8;
        let mut gear_counts = [0usize; 17];

        for sample in &zone.samples {
            speed_sum += sample.speed;
            max_speed = max_speed.max(sample.speed);
            min_speed = min_speed.min(sample.speed);
            throttle_sum += sample.throttle;
            if sample.brake {
                brake_count += 1;
            }
            let slot = (i16::from(sample.gear) + GEAR_OFFSET).clamp(0, 16) as usize;
            gear_counts[slot] += 1;
        }

        // Scanning from the lowest slot with a strict comparison breaks
        // count ties to the lowest gear, matching the lowest-index rule
        // used elsewhere in the crate.
        let mut dominant_gear = 0i8;
        let mut dominant_count = 0usize;
        for (slot, &count) in gear_counts.iter().enumerate() {
            if count > dominant_count {
                dominant_count = count;
                dominant_gear = (slot as i16 - GEAR_OFFSET) as i8;
            }
        }

        Some(Self {
            zone_index: zone.index,
            sample_count: zone.samples.len(),
            mean_speed: speed_sum / n,
            max_speed,
            min_speed,
            mean_throttle: throttle_sum / n,
            braking_fraction: brake_count as f64 / n,
            dominant_gear,
        })
    }

    /// Summarize every populated zone, in zone order.
    #[must_use]
    pub fn for_zones(zones: &[Zone]) -> Vec<Self> {
        zones.iter().filter_map(Self::from_zone).collect()
    }
}
