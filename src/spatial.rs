//! Nearest-point queries over a zone's accumulated outline points.
//!
//! Brute force is fine at this scale: one lap's outline contributes
//! hundreds of points per zone, not millions. The [`SpatialIndex`] trait is
//! the seam for swapping in a spatial tree later without touching callers.

use nalgebra::Point2;

use crate::zone::Zone;

/// Nearest-point query interface over a set of 2-D points.
pub trait SpatialIndex {
    /// Minimum Euclidean distance from `point` to any indexed point.
    ///
    /// Returns `f64::INFINITY` when the index is empty, so whole-track
    /// nearest-zone searches need no special case for unpopulated zones.
    fn nearest_distance(&self, point: [f64; 2]) -> f64;

    /// Number of indexed points.
    fn len(&self) -> usize;

    /// Whether the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brute-force index borrowing a slice of points.
///
/// O(n) per query over the borrowed slice.
#[derive(Debug, Clone, Copy)]
pub struct BruteForceIndex<'a> {
    points: &'a [[f64; 2]],
}

impl<'a> BruteForceIndex<'a> {
    /// Index an existing slice of points.
    #[must_use]
    pub const fn new(points: &'a [[f64; 2]]) -> Self {
        Self { points }
    }

    /// Index a zone's accumulated outline points.
    #[must_use]
    pub fn for_zone(zone: &'a Zone) -> Self {
        Self::new(&zone.boundary_points)
    }
}

impl SpatialIndex for BruteForceIndex<'_> {
    fn nearest_distance(&self, point: [f64; 2]) -> f64 {
        let query = Point2::new(point[0], point[1]);
        self.points
            .iter()
            .map(|p| nalgebra::distance_squared(&Point2::new(p[0], p[1]), &query))
            .fold(f64::INFINITY, f64::min)
            .sqrt()
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
