//! Breadth-first reachability over a [`PathNetwork`].
//!
//! The adjacency list is rebuilt from the segment list on every call, so a
//! result can never go stale across edits.  Cost is O(V + E) per query,
//! trivial on a 9×9 board.
//!
//! Diagnostics are returned, not printed: [`reachability_traced`] hands back
//! a [`ReachTrace`] alongside the result.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use oc_core::Point;

use crate::network::PathNetwork;

/// Which of the requested targets the start point connects to.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Reachability {
    /// One flag per input target, in input order.
    pub reached: Vec<bool>,
    /// The reached targets, in input order (duplicates kept).
    pub connected: Vec<Point>,
    /// Number of targets requested.
    pub total: usize,
}

impl Reachability {
    #[inline]
    pub fn connected_count(&self) -> usize {
        self.connected.len()
    }

    /// `true` when every target was reached.  Vacuously true for zero
    /// targets; callers that need "solved" must also require `total > 0`.
    #[inline]
    pub fn all_reached(&self) -> bool {
        self.connected.len() == self.total
    }
}

/// Optional diagnostics for a reachability query.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ReachTrace {
    /// Cells in the order BFS dequeued them, starting with the start cell.
    pub visit_order: Vec<Point>,
    /// Segments in the network at query time.
    pub segments_examined: usize,
}

/// Every cell connected to `start` (including `start` itself).
pub fn reachable_cells(network: &PathNetwork, start: Point) -> FxHashSet<Point> {
    bfs(network, start, None)
}

/// Evaluate each of `targets` against one BFS from `start`.
pub fn reachability(network: &PathNetwork, start: Point, targets: &[Point]) -> Reachability {
    if targets.is_empty() {
        return Reachability::default();
    }
    let visited = bfs(network, start, None);
    classify(&visited, targets)
}

/// [`reachability`] plus a [`ReachTrace`].
pub fn reachability_traced(
    network: &PathNetwork,
    start:   Point,
    targets: &[Point],
) -> (Reachability, ReachTrace) {
    let mut trace = ReachTrace {
        visit_order:       Vec::new(),
        segments_examined: network.len(),
    };
    if targets.is_empty() {
        return (Reachability::default(), trace);
    }
    let visited = bfs(network, start, Some(&mut trace.visit_order));
    (classify(&visited, targets), trace)
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn classify(visited: &FxHashSet<Point>, targets: &[Point]) -> Reachability {
    let reached: Vec<bool> = targets.iter().map(|t| visited.contains(t)).collect();
    let connected = targets
        .iter()
        .zip(&reached)
        .filter(|&(_, &hit)| hit)
        .map(|(&t, _)| t)
        .collect();
    Reachability { reached, connected, total: targets.len() }
}

fn bfs(network: &PathNetwork, start: Point, mut order: Option<&mut Vec<Point>>) -> FxHashSet<Point> {
    let mut adjacency: FxHashMap<Point, Vec<Point>> = FxHashMap::default();
    for seg in network.segments() {
        let (a, b) = seg.endpoints();
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        if let Some(order) = order.as_deref_mut() {
            order.push(cur);
        }
        let Some(neighbours) = adjacency.get(&cur) else {
            continue;
        };
        for &n in neighbours {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    visited
}
