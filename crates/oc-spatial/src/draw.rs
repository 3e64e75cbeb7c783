//! Rule-checked editing of the current route.
//!
//! The drawing surface toggles the segment between the last touched cell and
//! the newly touched one.  Unlike the bare [`PathNetwork`] API, a rejected
//! edit reports why so the surface can tell the player; the network is left
//! untouched either way.

use oc_core::{GridSize, Point};

use crate::network::PathNetwork;
use crate::obstacles::ObstacleMap;
use crate::{SpatialError, SpatialResult};

/// Limits an edit must respect.
#[derive(Clone, Copy, Debug)]
pub struct DrawRules<'a> {
    pub grid: GridSize,
    pub obstacles: &'a ObstacleMap,
    /// Insertions are refused once the route holds this many segments.
    pub max_segments: u32,
}

/// What an accepted edit did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EditOutcome {
    Added,
    Removed,
}

/// Toggle the segment `(a, b)` on `network` under `rules`.
///
/// Removing an existing segment is always allowed; the budget only limits
/// insertions.
pub fn draw_segment(
    network: &mut PathNetwork,
    a:       Point,
    b:       Point,
    rules:   &DrawRules<'_>,
) -> SpatialResult<EditOutcome> {
    for p in [a, b] {
        if !rules.grid.contains(p) {
            return Err(SpatialError::OffGrid(p));
        }
        if let Some(obstacle) = rules.obstacles.at(p) {
            return Err(SpatialError::Blocked { at: p, kind: obstacle.kind });
        }
    }
    if !a.is_adjacent(b) {
        return Err(SpatialError::NotAdjacent { a, b });
    }

    if network.remove(a, b) {
        return Ok(EditOutcome::Removed);
    }
    if network.len() >= rules.max_segments as usize {
        return Err(SpatialError::SegmentBudgetExhausted { max: rules.max_segments });
    }
    network.insert(a, b);
    Ok(EditOutcome::Added)
}
