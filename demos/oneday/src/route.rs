//! Automatic route drawing for the headless driver.
//!
//! Each leg is an A* search over free cells from the previous stop, so the
//! drawn network is a chain depot → d1 → d2 … that avoids obstacles.

use pathfinding::prelude::astar;

use oc_core::{Direction, GridSize, Point};
use oc_spatial::ObstacleMap;

/// Shortest obstacle-free cell path from `start` to `goal`, both ends
/// included.
pub fn leg(grid: GridSize, obstacles: &ObstacleMap, start: Point, goal: Point) -> Option<Vec<Point>> {
    astar(
        &start,
        |&p| {
            Direction::ALL
                .iter()
                .map(move |&d| p.step(d))
                .filter(|&n| grid.contains(n) && !obstacles.is_blocked(n))
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |p| p.manhattan(goal),
        |p| *p == goal,
    )
    .map(|(path, _cost)| path)
}

/// Consecutive cell pairs of the legs visiting `stops` in order from
/// `depot`.  Stops with no free path are skipped.
pub fn plan(grid: GridSize, obstacles: &ObstacleMap, depot: Point, stops: &[Point]) -> Vec<(Point, Point)> {
    let mut edges = Vec::new();
    let mut at = depot;
    for &stop in stops {
        let Some(cells) = leg(grid, obstacles, at, stop) else {
            log::warn!("no free path from {at} to {stop}");
            continue;
        };
        edges.extend(cells.windows(2).map(|w| (w[0], w[1])));
        at = stop;
    }
    edges
}
