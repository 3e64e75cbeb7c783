//! Tile-placement variant: fixed road tiles with compass connectors.
//!
//! A move from cell `P` towards `D` is allowed when `P` is open towards `D`
//! and either the neighbour is a destination (destinations carry no tile and
//! accept traffic from any side) or the neighbour's tile is open towards
//! `D.opposite()`.  The depot is open on all four sides.
//!
//! This model is independent of [`crate::network`]; nothing here reads or
//! writes a `PathNetwork`.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use oc_core::{Direction, GridSize, Point};

// ── Shapes and rotations ──────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileShape {
    Straight,
    Curve,
    T,
    Cross,
    Empty,
}

/// Clockwise rotation in quarter turns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// `None` for anything other than 0, 90, 180 or 270.
    pub fn from_degrees(deg: u16) -> Option<Rotation> {
        match deg {
            0   => Some(Rotation::R0),
            90  => Some(Rotation::R90),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R270),
            _   => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0   => 0,
            Rotation::R90  => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// One quarter turn clockwise.
    pub fn turned(self) -> Rotation {
        match self {
            Rotation::R0   => Rotation::R90,
            Rotation::R90  => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

// ── Connectors ────────────────────────────────────────────────────────────────

/// Which sides of a tile are open.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Connectors {
    pub n: bool,
    pub e: bool,
    pub s: bool,
    pub w: bool,
}

impl Connectors {
    pub const NONE: Connectors = Connectors { n: false, e: false, s: false, w: false };
    pub const ALL:  Connectors = Connectors { n: true,  e: true,  s: true,  w: true  };

    const fn of(n: bool, e: bool, s: bool, w: bool) -> Connectors {
        Connectors { n, e, s, w }
    }

    #[inline]
    pub fn opens(self, dir: Direction) -> bool {
        match dir {
            Direction::N => self.n,
            Direction::E => self.e,
            Direction::S => self.s,
            Direction::W => self.w,
        }
    }
}

/// The static connector table.
pub const fn connectors(shape: TileShape, rotation: Rotation) -> Connectors {
    use Rotation::*;
    match (shape, rotation) {
        (TileShape::Empty, _) => Connectors::NONE,
        (TileShape::Cross, _) => Connectors::ALL,

        (TileShape::Straight, R0 | R180) => Connectors::of(true, false, true, false),
        (TileShape::Straight, R90 | R270) => Connectors::of(false, true, false, true),

        (TileShape::Curve, R0)   => Connectors::of(true, true, false, false),
        (TileShape::Curve, R90)  => Connectors::of(false, true, true, false),
        (TileShape::Curve, R180) => Connectors::of(false, false, true, true),
        (TileShape::Curve, R270) => Connectors::of(true, false, false, true),

        (TileShape::T, R0)   => Connectors::of(true, true, true, false),
        (TileShape::T, R90)  => Connectors::of(false, true, true, true),
        (TileShape::T, R180) => Connectors::of(true, false, true, true),
        (TileShape::T, R270) => Connectors::of(true, true, false, true),
    }
}

// ── Tile & TileGrid ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pos: Point,
    pub shape: TileShape,
    pub rotation: Rotation,
}

impl Tile {
    pub fn new(pos: Point, shape: TileShape, rotation: Rotation) -> Self {
        Self { pos, shape, rotation }
    }

    #[inline]
    pub fn connectors(&self) -> Connectors {
        connectors(self.shape, self.rotation)
    }
}

/// Dense `cols × rows` grid of optional tiles, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    size:  GridSize,
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    pub fn new(size: GridSize) -> Self {
        Self { size, cells: vec![None; size.cell_count()] }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.size.contains(p)
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.size.cols as usize + p.x as usize)
    }

    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.index(p).and_then(|i| self.cells[i].as_ref())
    }

    /// Place (or replace) a tile at `tile.pos`.  Returns `false` if off-grid.
    pub fn place(&mut self, tile: Tile) -> bool {
        match self.index(tile.pos) {
            Some(i) => {
                self.cells[i] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at `p`.
    pub fn clear(&mut self, p: Point) -> Option<Tile> {
        self.index(p).and_then(|i| self.cells[i].take())
    }

    /// Open sides at `p`; closed everywhere for an absent or empty tile.
    pub fn connectors_at(&self, p: Point) -> Connectors {
        self.get(p).map_or(Connectors::NONE, Tile::connectors)
    }

    /// Number of placed tiles whose shape is not `Empty`.
    pub fn placed_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|t| t.shape != TileShape::Empty)
            .count()
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Outcome of [`solve_tiles`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSolution {
    /// Every destination was reached.
    pub solved: bool,
    /// Non-empty tiles on the whole grid (not only the connected ones).
    pub tiles_used: usize,
    /// Cells reached from the depot, for incremental highlighting.
    pub visited: FxHashSet<Point>,
}

/// BFS from `depot` through matching connectors.
pub fn solve_tiles(grid: &TileGrid, depot: Point, destinations: &[Point]) -> TileSolution {
    let targets: FxHashSet<Point> = destinations.iter().copied().collect();

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(depot);
    queue.push_back(depot);

    while let Some(p) = queue.pop_front() {
        let open = if p == depot { Connectors::ALL } else { grid.connectors_at(p) };

        for dir in Direction::ALL {
            if !open.opens(dir) {
                continue;
            }
            let n = p.step(dir);
            if !grid.in_bounds(n) {
                continue;
            }
            let enterable = targets.contains(&n) || grid.connectors_at(n).opens(dir.opposite());
            if enterable && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }

    TileSolution {
        solved:     destinations.iter().all(|d| visited.contains(d)),
        tiles_used: grid.placed_count(),
        visited,
    }
}
