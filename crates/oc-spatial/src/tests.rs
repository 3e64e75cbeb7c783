//! Unit tests for oc-spatial.
//!
//! All boards are hand-built so assertions stay readable.

#[cfg(test)]
mod helpers {
    use oc_core::Point;

    use crate::PathNetwork;

    pub fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Straight horizontal road from `(x0, y)` to `(x1, y)`.
    pub fn row(y: i32, x0: i32, x1: i32) -> PathNetwork {
        (x0..x1).map(|x| (p(x, y), p(x + 1, y))).collect()
    }
}

// ── Network editing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use super::helpers::{p, row};
    use crate::{Orientation, PathNetwork, PathSegment, add_segment, remove_segment};

    #[test]
    fn add_then_remove_round_trips() {
        let base = row(4, 1, 3);
        for (a, b) in [(p(3, 4), p(4, 4)), (p(2, 4), p(2, 5)), (p(6, 6), p(6, 5))] {
            let grown = add_segment(&base, a, b);
            assert_eq!(grown.len(), base.len() + 1);
            let back = remove_segment(&grown, a, b);
            assert_eq!(back, base);
            assert_eq!(back.cells(), base.cells());
        }
    }

    #[test]
    fn non_adjacent_insert_is_noop() {
        let base = row(0, 0, 2);
        for (a, b) in [(p(0, 0), p(2, 0)), (p(0, 0), p(1, 1)), (p(3, 3), p(3, 3))] {
            let same = add_segment(&base, a, b);
            assert_eq!(same, base);
            assert_eq!(same.cells(), base.cells());
        }
    }

    #[test]
    fn duplicate_in_either_orientation_is_noop() {
        let mut net = PathNetwork::new();
        assert!(net.insert(p(1, 1), p(2, 1)));
        assert!(!net.insert(p(1, 1), p(2, 1)));
        assert!(!net.insert(p(2, 1), p(1, 1)));
        assert_eq!(net.len(), 1);
        assert!(net.contains_segment(p(2, 1), p(1, 1)));
    }

    #[test]
    fn removal_matches_reverse_orientation() {
        let mut net = row(2, 0, 2);
        assert!(net.remove(p(2, 2), p(1, 2)));
        assert_eq!(net.len(), 1);
        assert!(!net.contains_cell(p(2, 2)));
        assert!(net.contains_cell(p(1, 2)));
    }

    #[test]
    fn cells_drop_out_when_orphaned() {
        let mut net = PathNetwork::new();
        net.insert(p(1, 4), p(2, 4));
        net.remove(p(1, 4), p(2, 4));
        assert!(net.cells().is_empty());
        assert!(net.is_empty());
    }

    #[test]
    fn shared_cell_survives_partial_removal() {
        let mut net = row(0, 0, 2); // (0,0)-(1,0)-(2,0)
        net.remove(p(0, 0), p(1, 0));
        assert!(net.contains_cell(p(1, 0)));
        assert!(!net.contains_cell(p(0, 0)));
    }

    #[test]
    fn segment_orientation_and_normalisation() {
        let h = PathSegment::new(p(3, 1), p(2, 1)).unwrap();
        assert_eq!(h.orientation(), Orientation::Horizontal);
        assert_eq!(h.endpoints(), (p(2, 1), p(3, 1)));
        assert_eq!(h, PathSegment::new(p(2, 1), p(3, 1)).unwrap());
        let v = PathSegment::new(p(0, 0), p(0, 1)).unwrap();
        assert_eq!(v.orientation(), Orientation::Vertical);
        assert_eq!(v.other_end(p(0, 1)), Some(p(0, 0)));
        assert_eq!(v.other_end(p(5, 5)), None);
        assert!(PathSegment::new(p(0, 0), p(1, 1)).is_none());
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reach {
    use super::helpers::{p, row};
    use crate::{PathNetwork, reachability, reachability_traced, reachable_cells};

    #[test]
    fn symmetric_in_segment_orientation() {
        let mut net = PathNetwork::new();
        net.insert(p(4, 4), p(4, 5));
        assert_eq!(reachability(&net, p(4, 4), &[p(4, 5)]).connected_count(), 1);
        assert_eq!(reachability(&net, p(4, 5), &[p(4, 4)]).connected_count(), 1);
    }

    #[test]
    fn empty_targets_zero_zero() {
        let r = reachability(&row(0, 0, 3), p(0, 0), &[]);
        assert_eq!(r.total, 0);
        assert_eq!(r.connected_count(), 0);
        assert!(r.reached.is_empty());
    }

    #[test]
    fn start_is_trivially_reached() {
        let r = reachability(&PathNetwork::new(), p(1, 4), &[p(1, 4)]);
        assert_eq!(r.reached, vec![true]);
    }

    #[test]
    fn duplicates_evaluated_independently() {
        let net = row(4, 1, 4);
        let r = reachability(&net, p(1, 4), &[p(4, 4), p(7, 7), p(4, 4)]);
        assert_eq!(r.reached, vec![true, false, true]);
        assert_eq!(r.connected, vec![p(4, 4), p(4, 4)]);
        assert_eq!(r.total, 3);
        assert!(!r.all_reached());
    }

    #[test]
    fn disconnected_piece_not_reached() {
        let mut net = row(4, 1, 3);
        net.insert(p(6, 6), p(7, 6));
        let r = reachability(&net, p(1, 4), &[p(3, 4), p(7, 6)]);
        assert_eq!(r.reached, vec![true, false]);
    }

    #[test]
    fn result_tracks_edits() {
        let mut net = row(4, 1, 3);
        assert!(reachability(&net, p(1, 4), &[p(3, 4)]).all_reached());
        net.remove(p(2, 4), p(3, 4));
        assert!(!reachability(&net, p(1, 4), &[p(3, 4)]).all_reached());
        net.insert(p(3, 4), p(2, 4));
        assert!(reachability(&net, p(1, 4), &[p(3, 4)]).all_reached());
    }

    #[test]
    fn loops_terminate() {
        let net: PathNetwork = [
            (p(0, 0), p(1, 0)),
            (p(1, 0), p(1, 1)),
            (p(1, 1), p(0, 1)),
            (p(0, 1), p(0, 0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(reachable_cells(&net, p(0, 0)).len(), 4);
    }

    #[test]
    fn trace_reports_bfs_order() {
        let net = row(0, 0, 2);
        let (r, trace) = reachability_traced(&net, p(0, 0), &[p(2, 0)]);
        assert!(r.all_reached());
        assert_eq!(trace.visit_order, vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(trace.segments_examined, 2);
    }
}

// ── Tile grid ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tiles {
    use oc_core::{Direction, GridSize};

    use super::helpers::p;
    use crate::{Connectors, Rotation, Tile, TileGrid, TileShape, connectors, solve_tiles};

    #[test]
    fn straight_row_solves() {
        let mut grid = TileGrid::new(GridSize::new(5, 3));
        for x in 0..=4 {
            grid.place(Tile::new(p(x, 1), TileShape::Straight, Rotation::R90));
        }
        let res = solve_tiles(&grid, p(0, 1), &[p(4, 1)]);
        assert!(res.solved);
        assert_eq!(res.tiles_used, 5);
    }

    #[test]
    fn gap_breaks_route() {
        let mut grid = TileGrid::new(GridSize::new(5, 3));
        for x in [0, 1, 3, 4] {
            grid.place(Tile::new(p(x, 1), TileShape::Straight, Rotation::R90));
        }
        let res = solve_tiles(&grid, p(0, 1), &[p(4, 1)]);
        assert!(!res.solved);
        assert!(res.visited.contains(&p(1, 1)));
        assert!(!res.visited.contains(&p(3, 1)));
    }

    #[test]
    fn misrotated_neighbour_blocks() {
        let mut grid = TileGrid::new(GridSize::new(3, 1));
        grid.place(Tile::new(p(1, 0), TileShape::Straight, Rotation::R0)); // N-S only
        let res = solve_tiles(&grid, p(0, 0), &[p(2, 0)]);
        assert!(!res.solved);
        assert!(!res.visited.contains(&p(1, 0)));
    }

    #[test]
    fn destination_accepts_from_any_side() {
        // Depot (0,0) -> curve at (1,0) turning south -> destination (1,1)
        // which has no tile at all.
        let mut grid = TileGrid::new(GridSize::new(3, 3));
        grid.place(Tile::new(p(1, 0), TileShape::Curve, Rotation::R180)); // S + W
        let res = solve_tiles(&grid, p(0, 0), &[p(1, 1)]);
        assert!(res.solved);
        assert_eq!(res.tiles_used, 1);
    }

    #[test]
    fn depot_adjacent_destination_needs_no_tiles() {
        let grid = TileGrid::new(GridSize::new(3, 3));
        let res = solve_tiles(&grid, p(1, 1), &[p(1, 2)]);
        assert!(res.solved);
        assert_eq!(res.tiles_used, 0);
    }

    #[test]
    fn empty_tiles_are_not_counted() {
        let mut grid = TileGrid::new(GridSize::new(3, 3));
        grid.place(Tile::new(p(0, 0), TileShape::Empty, Rotation::R0));
        grid.place(Tile::new(p(1, 0), TileShape::Cross, Rotation::R0));
        assert_eq!(grid.placed_count(), 1);
        assert!(!grid.place(Tile::new(p(3, 0), TileShape::Cross, Rotation::R0)));
        assert_eq!(grid.clear(p(1, 0)).map(|t| t.shape), Some(TileShape::Cross));
        assert_eq!(grid.placed_count(), 0);
    }

    #[test]
    fn connector_table_spot_checks() {
        assert_eq!(connectors(TileShape::Curve, Rotation::R270), Connectors { n: true, e: false, s: false, w: true });
        assert_eq!(connectors(TileShape::T, Rotation::R90), Connectors { n: false, e: true, s: true, w: true });
        assert_eq!(connectors(TileShape::Empty, Rotation::R90), Connectors::NONE);
        for r in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
            assert_eq!(connectors(TileShape::Cross, r), Connectors::ALL);
            assert_eq!(Rotation::from_degrees(r.degrees()), Some(r));
        }
        assert!(connectors(TileShape::Straight, Rotation::R90).opens(Direction::E));
        assert_eq!(Rotation::R270.turned(), Rotation::R0);
        assert_eq!(Rotation::from_degrees(45), None);
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacles {
    use oc_core::{ObstacleParams, rng::small_rng};

    use super::helpers::p;
    use crate::{ObstacleKind, ObstacleMap, generate_obstacles, generate_obstacles_with};

    #[test]
    fn reference_sequence_seed_one() {
        let obs = generate_obstacles(1, 9, p(1, 4), &[]);
        assert_eq!(obs.len(), 17);
        assert_eq!(obs[0].pos, p(4, 1));
        assert_eq!(obs[0].kind, ObstacleKind::Building);
        assert_eq!(obs[1].pos, p(4, 8));
        assert_eq!(obs[2].pos, p(6, 2));
        assert_eq!(obs[2].kind, ObstacleKind::Water);
        assert_eq!(obs[3].pos, p(1, 0));
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let dests = [p(3, 2), p(5, 5), p(7, 3)];
        for seed in [0, 7, 42, 999_999] {
            assert_eq!(
                generate_obstacles(seed, 9, p(1, 4), &dests),
                generate_obstacles(seed, 9, p(1, 4), &dests),
            );
        }
    }

    #[test]
    fn never_overlaps_depot_destinations_or_itself() {
        let depot = p(1, 4);
        let dests = [p(3, 2), p(4, 3), p(5, 4), p(6, 5), p(7, 6)];
        for seed in 0..200 {
            let obs = generate_obstacles(seed, 9, depot, &dests);
            assert!(obs.len() <= 17);
            let map = ObstacleMap::new(obs.clone());
            assert_eq!(map.len(), obs.len(), "duplicate cell for seed {seed}");
            assert!(!map.is_blocked(depot));
            for d in dests {
                assert!(!map.is_blocked(d));
            }
            for o in &obs {
                assert!(o.pos.x >= 0 && o.pos.x < 9 && o.pos.y >= 0 && o.pos.y < 9);
            }
        }
    }

    #[test]
    fn full_board_yields_fewer_obstacles() {
        // 3×3 with every cell excluded: target is floor(0.22 * 9) = 1 but
        // nothing can be placed.
        let dests: Vec<_> = (0..3).flat_map(|y| (0..3).map(move |x| p(x, y))).collect();
        let obs = generate_obstacles(5, 3, p(0, 0), &dests);
        assert!(obs.is_empty());
    }

    #[test]
    fn injectable_generator() {
        let params = ObstacleParams { density: 0.5, max_attempts: 50 };
        let a = generate_obstacles_with(&mut small_rng(3), 6, &params, p(0, 0), &[]);
        let b = generate_obstacles_with(&mut small_rng(3), 6, &params, p(0, 0), &[]);
        assert_eq!(a, b);
        assert!(a.len() <= 18);
    }

    #[test]
    fn map_lookup() {
        let obs = generate_obstacles(1, 9, p(1, 4), &[]);
        let map = ObstacleMap::new(obs);
        assert_eq!(map.at(p(4, 1)).map(|o| o.kind), Some(ObstacleKind::Building));
        assert!(map.at(p(1, 4)).is_none());
    }
}

// ── Checked drawing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod draw {
    use oc_core::GridSize;

    use super::helpers::p;
    use crate::{
        DrawRules, EditOutcome, Obstacle, ObstacleKind, ObstacleMap, PathNetwork, SpatialError,
        draw_segment,
    };

    fn blocked_map() -> ObstacleMap {
        ObstacleMap::new(vec![Obstacle { pos: p(3, 3), kind: ObstacleKind::Water }])
    }

    #[test]
    fn toggles_segment() {
        let obstacles = ObstacleMap::default();
        let rules = DrawRules { grid: GridSize::square(9), obstacles: &obstacles, max_segments: 20 };
        let mut net = PathNetwork::new();
        assert_eq!(draw_segment(&mut net, p(1, 4), p(2, 4), &rules), Ok(EditOutcome::Added));
        assert_eq!(draw_segment(&mut net, p(2, 4), p(1, 4), &rules), Ok(EditOutcome::Removed));
        assert!(net.is_empty());
    }

    #[test]
    fn obstacle_cells_refused() {
        let obstacles = blocked_map();
        let rules = DrawRules { grid: GridSize::square(9), obstacles: &obstacles, max_segments: 20 };
        let mut net = PathNetwork::new();
        assert_eq!(
            draw_segment(&mut net, p(2, 3), p(3, 3), &rules),
            Err(SpatialError::Blocked { at: p(3, 3), kind: ObstacleKind::Water }),
        );
        assert!(net.is_empty());
    }

    #[test]
    fn off_grid_and_non_adjacent_refused() {
        let obstacles = ObstacleMap::default();
        let rules = DrawRules { grid: GridSize::square(9), obstacles: &obstacles, max_segments: 20 };
        let mut net = PathNetwork::new();
        assert_eq!(draw_segment(&mut net, p(8, 0), p(9, 0), &rules), Err(SpatialError::OffGrid(p(9, 0))));
        assert!(matches!(
            draw_segment(&mut net, p(0, 0), p(2, 0), &rules),
            Err(SpatialError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn budget_limits_insertions_not_removals() {
        let obstacles = ObstacleMap::default();
        let rules = DrawRules { grid: GridSize::square(9), obstacles: &obstacles, max_segments: 2 };
        let mut net = PathNetwork::new();
        draw_segment(&mut net, p(0, 0), p(1, 0), &rules).unwrap();
        draw_segment(&mut net, p(1, 0), p(2, 0), &rules).unwrap();
        assert_eq!(
            draw_segment(&mut net, p(2, 0), p(3, 0), &rules),
            Err(SpatialError::SegmentBudgetExhausted { max: 2 }),
        );
        assert_eq!(net.len(), 2);
        assert_eq!(draw_segment(&mut net, p(1, 0), p(2, 0), &rules), Ok(EditOutcome::Removed));
    }
}
