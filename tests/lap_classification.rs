//! End-to-end zone partitioning and classification scenarios.
//!
//! These tests drive the full pipeline — marker ingestion, zone building,
//! bulk outline classification, sequential telemetry classification — the
//! way a session-analysis caller would, and pin down the coverage and
//! wraparound properties on dense synthetic laps.

use track_zones::{
    build_corner_zones, build_marshal_zones, classify_nearest, classify_outline, BruteForceIndex,
    LapMetric, Marker, PartitionConfig, SampleSource, SequentialClassifier, SpatialIndex,
    TelemetrySample, Zone, ZoneSummary,
};

// =============================================================================
// SYNTHETIC LAP GENERATORS
// =============================================================================

/// Generate an ordered lap of telemetry on a circular circuit centerline.
fn generate_lap(n: usize, track_length: f64) -> Vec<TelemetrySample> {
    (0..n)
        .map(|i| {
            let distance = i as f64 / n as f64 * track_length;
            let angle = std::f64::consts::TAU * distance / track_length;
            let radius = track_length / std::f64::consts::TAU;
            TelemetrySample {
                distance,
                x: radius * angle.cos(),
                y: radius * angle.sin(),
                speed: 180.0 + 120.0 * (3.0 * angle).cos(),
                throttle: 50.0 + 50.0 * (3.0 * angle).cos().max(0.0),
                gear: 4 + ((3.0 * angle).cos() * 3.0) as i8,
                brake: (3.0 * angle).cos() < -0.6,
                source: if i % 7 == 0 {
                    SampleSource::Interpolation
                } else {
                    SampleSource::Sensor
                },
            }
        })
        .collect()
}

fn outline_of(samples: &[TelemetrySample]) -> Vec<(f64, f64, f64)> {
    samples.iter().map(|s| (s.distance, s.x, s.y)).collect()
}

fn marshal_zones(distances: &[f64], metric: &LapMetric, config: &PartitionConfig) -> Vec<Zone> {
    let markers: Vec<Marker> = distances.iter().map(|&d| Marker::boundary(d)).collect();
    build_marshal_zones(&markers, metric, config).unwrap()
}

// =============================================================================
// COVERAGE AND WRAPAROUND PROPERTIES
// =============================================================================

#[test]
fn dense_scan_covers_track_exactly_once() {
    let metric = LapMetric::new(5891.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    // Uneven real-world-style sector boundaries, not anchored at zero.
    let mut zones = marshal_zones(
        &[312.0, 890.5, 1650.0, 2407.25, 3311.0, 4102.0, 5240.75],
        &metric,
        &config,
    );

    let steps = 58_910; // 0.1 m resolution
    let points: Vec<(f64, f64, f64)> = (0..steps)
        .map(|i| (i as f64 * 0.1, 0.0, 0.0))
        .collect();
    classify_outline(&mut zones, &points, &metric, &config);

    let total: usize = zones.iter().map(Zone::boundary_point_count).sum();
    assert_eq!(total, steps, "every point must land in exactly one zone");
    for zone in &zones {
        let expected = (zone.length / 0.1).round() as usize;
        let got = zone.boundary_point_count();
        assert!(
            got.abs_diff(expected) <= 1,
            "zone {} got {got} points, expected ~{expected}",
            zone.index
        );
    }
}

#[test]
fn wrapping_zone_classifies_across_the_line() {
    let metric = LapMetric::new(1000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    // The last zone spans [800, 150): it wraps past the start/finish line.
    let mut zones = marshal_zones(&[150.0, 500.0, 800.0], &metric, &config);
    assert_eq!(zones[2].start, 800.0);
    assert_eq!(zones[2].end, 150.0);

    let points = [
        (999.0, 1.0, 0.0),  // just before the line
        (0.0, 2.0, 0.0),    // on the line
        (149.9, 3.0, 0.0),  // just inside the wrap
        (150.0, 4.0, 0.0),  // first point of zone 1
    ];
    classify_outline(&mut zones, &points, &metric, &config);

    assert_eq!(zones[2].boundary_point_count(), 3);
    assert_eq!(zones[0].boundary_point_count(), 1);
    assert_eq!(zones[0].boundary_points[0], [4.0, 0.0]);
}

#[test]
fn four_sector_scenario_from_circuit_data() {
    // TrackLength 1000, markers [0, 250, 500, 750]: four zones of 250 m.
    let metric = LapMetric::new(1000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let mut zones = marshal_zones(&[0.0, 250.0, 500.0, 750.0], &metric, &config);

    assert_eq!(zones.len(), 4);
    assert!(zones.iter().all(|z| (z.length - 250.0).abs() < 1e-9));

    classify_outline(
        &mut zones,
        &[(999.0, 0.0, 0.0), (250.0, 1.0, 1.0)],
        &metric,
        &config,
    );
    // 999 lands in zone 4 ([750, 1000)); 250.0 in zone 2, not zone 1.
    assert_eq!(zones[3].boundary_point_count(), 1);
    assert_eq!(zones[1].boundary_point_count(), 1);
    assert_eq!(zones[0].boundary_point_count(), 0);
}

#[test]
fn apex_scenario_midpoints_and_full_coverage() {
    // Apexes [100, 400, 800] on a 1000 m track: boundaries at 250 and 600,
    // corner 3 ends at 1000, lengths sum exactly to the track length.
    let metric = LapMetric::new(1000.0).unwrap();
    let config = PartitionConfig::corner_zones();
    let markers = vec![
        Marker::corner(100.0, 100.0, 1),
        Marker::corner(400.0, 400.0, 2),
        Marker::corner(800.0, 800.0, 3),
    ];
    let zones = build_corner_zones(&markers, &metric, &config).unwrap();

    assert_eq!(zones[0].end, 250.0);
    assert_eq!(zones[1].end, 600.0);
    assert_eq!(zones[2].end, 1000.0);
    let total: f64 = zones.iter().map(|z| z.length).sum();
    assert!((total - 1000.0).abs() < 1e-9);
}

// =============================================================================
// SEQUENTIAL CLASSIFICATION
// =============================================================================

#[test]
fn sequential_wrap_sample_is_reported_not_guessed() {
    // Distances [10, 260, 500, 10]: the first three advance the cursor
    // through zones 1..3; the wrapped fourth matches neither zone 3 nor
    // zone 4 and must be reported unmatched.
    let metric = LapMetric::new(1000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let mut zones = marshal_zones(&[0.0, 250.0, 500.0, 750.0], &metric, &config);

    let samples: Vec<TelemetrySample> = [10.0, 260.0, 500.0, 10.0]
        .iter()
        .map(|&d| TelemetrySample {
            distance: d,
            x: 0.0,
            y: 0.0,
            speed: 100.0,
            throttle: 50.0,
            gear: 3,
            brake: false,
            source: SampleSource::Sensor,
        })
        .collect();

    let mut classifier = SequentialClassifier::new(metric, config);
    let report = classifier.run(&mut zones, &samples);

    assert_eq!(report.assigned, 3);
    assert_eq!(report.unmatched, vec![3]);
    assert_eq!(report.unmatched_count(), 1);
    assert!(!report.is_clean());
}

#[test]
fn full_lap_classifies_cleanly_and_summarizes() {
    let metric = LapMetric::new(4000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let mut zones = marshal_zones(&[0.0, 700.0, 1500.0, 2300.0, 3100.0], &metric, &config);

    let samples = generate_lap(800, 4000.0);
    let mut classifier = SequentialClassifier::new(metric, config);
    let report = classifier.run(&mut zones, &samples);

    assert!(report.is_clean());
    assert_eq!(report.assigned, 800);
    let total: usize = zones.iter().map(Zone::sample_count).sum();
    assert_eq!(total, 800);

    let summaries = ZoneSummary::for_zones(&zones);
    assert_eq!(summaries.len(), 5);
    for summary in &summaries {
        assert!(summary.mean_speed >= 60.0 && summary.mean_speed <= 300.0);
        assert!(summary.max_speed >= summary.mean_speed);
        assert!(summary.min_speed <= summary.mean_speed);
        assert!((0.0..=1.0).contains(&summary.braking_fraction));
    }
}

#[test]
fn interpolated_samples_can_be_excluded_per_lap() {
    let metric = LapMetric::new(4000.0).unwrap();
    let config = PartitionConfig::marshal_sectors().with_exclude_interpolated(true);
    let mut zones = marshal_zones(&[0.0, 1000.0, 2000.0, 3000.0], &metric, &config);

    let samples = generate_lap(700, 4000.0);
    let interpolated = samples
        .iter()
        .filter(|s| s.source == SampleSource::Interpolation)
        .count();

    let mut classifier = SequentialClassifier::new(metric, config);
    let report = classifier.run(&mut zones, &samples);

    assert_eq!(report.filtered, interpolated);
    assert_eq!(report.assigned, 700 - interpolated);
    let total: usize = zones.iter().map(Zone::sample_count).sum();
    assert_eq!(total, 700 - interpolated);
}

// =============================================================================
// SPATIAL FOOTPRINT AND NEAREST-POINT ASSIGNMENT
// =============================================================================

#[test]
fn nearest_point_assignment_after_bulk_pass() {
    let metric = LapMetric::new(2000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let mut zones = marshal_zones(&[0.0, 500.0, 1000.0, 1500.0], &metric, &config);

    // Populate the footprints from a clean lap.
    let lap = generate_lap(400, 2000.0);
    classify_outline(&mut zones, &outline_of(&lap), &metric, &config);
    assert!(zones.iter().all(|z| z.boundary_point_count() > 0));

    // Re-classify a handful of drifted samples spatially: position is
    // trusted, the distance channel is not (set to zero).
    let drifted: Vec<TelemetrySample> = lap
        .iter()
        .step_by(50)
        .map(|s| TelemetrySample {
            distance: 0.0,
            x: s.x + 0.5,
            y: s.y - 0.5,
            ..*s
        })
        .collect();

    let report = classify_nearest(&mut zones, &drifted, &config);
    assert!(report.is_clean());
    assert_eq!(report.assigned, drifted.len());
    // Drift of under a meter must not move a mid-zone sample elsewhere.
    assert!(zones[0].sample_count() >= 1);
}

#[test]
fn footprint_index_answers_nearest_queries() {
    let metric = LapMetric::new(2000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let mut zones = marshal_zones(&[0.0, 1000.0], &metric, &config);

    let lap = generate_lap(200, 2000.0);
    classify_outline(&mut zones, &outline_of(&lap), &metric, &config);

    let index = BruteForceIndex::for_zone(&zones[0]);
    assert!(!index.is_empty());
    // A point on the zone's own outline is at distance zero.
    let on_outline = zones[0].boundary_points[10];
    assert!(index.nearest_distance(on_outline) < 1e-9);
    // A point far outside the circuit is far from the outline.
    assert!(index.nearest_distance([1e6, 1e6]) > 1e5);
}

// =============================================================================
// MULTI-LAP MERGE (CALLER-SIDE)
// =============================================================================

#[test]
fn per_lap_copies_merge_by_concatenation() {
    let metric = LapMetric::new(1000.0).unwrap();
    let config = PartitionConfig::marshal_sectors();
    let template = marshal_zones(&[0.0, 250.0, 500.0, 750.0], &metric, &config);

    let lap_a = generate_lap(100, 1000.0);
    let lap_b = generate_lap(60, 1000.0);

    // Each lap classifies into its own independent copy.
    let mut zones_a = template.clone();
    SequentialClassifier::new(metric, config.clone()).run(&mut zones_a, &lap_a);
    let mut zones_b = template.clone();
    SequentialClassifier::new(metric, config).run(&mut zones_b, &lap_b);

    // Merge = per-index concatenation of the sample collections.
    let mut merged = template;
    for (dst, (a, b)) in merged.iter_mut().zip(zones_a.iter().zip(zones_b.iter())) {
        dst.samples.extend(a.samples.iter().copied());
        dst.samples.extend(b.samples.iter().copied());
    }

    let total: usize = merged.iter().map(Zone::sample_count).sum();
    assert_eq!(total, 160);
    for (i, zone) in merged.iter().enumerate() {
        assert_eq!(
            zone.sample_count(),
            zones_a[i].sample_count() + zones_b[i].sample_count()
        );
    }
}
