//! Route-length estimates used to score candidate assignments.
//!
//! The solver calls estimates through the [`RouteEstimate`] trait so a
//! smarter heuristic (e.g. a shortest tour on the obstacle map) can be
//! dropped in without touching the search.

use oc_core::Point;

/// Estimated segments needed for one vehicle to serve `destinations`.
pub trait RouteEstimate {
    fn estimate(&self, depot: Point, destinations: &[Point]) -> u32;
}

/// Σ Manhattan(depot, d) plus one per extra stop.
///
/// Ignores obstacles and shared road.
#[derive(Copy, Clone, Debug, Default)]
pub struct ManhattanEstimate;

impl RouteEstimate for ManhattanEstimate {
    fn estimate(&self, depot: Point, destinations: &[Point]) -> u32 {
        estimate_tiles(depot, destinations)
    }
}

/// The [`ManhattanEstimate`] formula.  Zero for no destinations.
pub fn estimate_tiles(depot: Point, destinations: &[Point]) -> u32 {
    if destinations.is_empty() {
        return 0;
    }
    let distance: u32 = destinations.iter().map(|&d| depot.manhattan(d)).sum();
    distance + (destinations.len() as u32 - 1)
}
