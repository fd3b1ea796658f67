//! Track Zones
//!
//! Closed-loop racetrack zone partitioning and telemetry-to-zone
//! classification.
//!
//! A circuit's sparse geometry markers (marshal-sector boundaries or corner
//! apexes) are turned into an ordered list of contiguous [`Zone`]s covering
//! the lap with no gaps and no overlaps, with correct handling of the
//! start/finish-line wraparound. A lap's dense telemetry stream is then
//! classified into those zones so per-zone statistics (speed, throttle,
//! braking, gear) can be aggregated.
//!
//! # Features
//!
//! - **Modular membership**: all zone tests wrap at the track length, so a
//!   zone spanning the start/finish line just works
//! - **Two build modes**: boundary markers (marshal sectors) or corner
//!   apexes with midpoint boundaries
//! - **Two classifiers**: bulk window membership for a lap's outline, and a
//!   forward-only cursor walk for ordered telemetry with explicit
//!   unmatched-sample reporting
//! - **Nearest-point fallback**: spatial assignment against each zone's
//!   accumulated footprint when the distance channel is unreliable
//!
//! # Quick Start
//!
//! ```
//! use track_zones::{
//!     build_marshal_zones, LapMetric, Marker, PartitionConfig,
//!     SequentialClassifier, TelemetrySample, SampleSource,
//! };
//!
//! let metric = LapMetric::new(1000.0)?;
//! let config = PartitionConfig::marshal_sectors();
//!
//! let markers: Vec<Marker> = [0.0, 250.0, 500.0, 750.0]
//!     .iter()
//!     .map(|&d| Marker::boundary(d))
//!     .collect();
//! let mut zones = build_marshal_zones(&markers, &metric, &config)?;
//!
//! let samples = vec![TelemetrySample {
//!     distance: 120.0,
//!     x: 34.5,
//!     y: -2.0,
//!     speed: 287.0,
//!     throttle: 100.0,
//!     gear: 8,
//!     brake: false,
//!     source: SampleSource::Sensor,
//! }];
//!
//! let mut classifier = SequentialClassifier::new(metric, config);
//! let report = classifier.run(&mut zones, &samples);
//!
//! assert!(report.is_clean());
//! assert_eq!(zones[0].sample_count(), 1);
//! # Ok::<(), track_zones::ZoneError>(())
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod metric;
pub mod spatial;
pub mod summary;
pub mod zone;

// Re-exports for convenient access
pub use builder::{build_corner_zones, build_marshal_zones};
pub use classify::{
    classify_nearest, classify_outline, Assignment, ClassificationReport, SequentialClassifier,
};
pub use config::PartitionConfig;
pub use error::{Result, ZoneError};
pub use metric::LapMetric;
pub use spatial::{BruteForceIndex, SpatialIndex};
pub use summary::ZoneSummary;
pub use zone::{Marker, SampleSource, TelemetrySample, Zone, ZoneSample};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
