//! Integer grid coordinates and compass directions.
//!
//! `Point` is the single key type for every cell-membership set in the
//! workspace (path cells, obstacle lookup, BFS visited sets).  Equality and
//! hashing are derived structurally here and nowhere else.
//!
//! Coordinates are signed so that stepping off the west or north edge yields
//! a representable point that [`GridSize::contains`] then rejects.

use std::fmt;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A cell on the delivery grid.  `y` grows southward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab distance.
    #[inline]
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if the two points share an edge (distance exactly 1).
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }

    /// The neighbouring cell one step in `dir`.  May lie outside the grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Point {
        match dir {
            Direction::N => Point::new(self.x, self.y - 1),
            Direction::E => Point::new(self.x + 1, self.y),
            Direction::S => Point::new(self.x, self.y + 1),
            Direction::W => Point::new(self.x - 1, self.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four compass sides of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    /// All directions in BFS expansion order.
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::E => Direction::W,
            Direction::S => Direction::N,
            Direction::W => Direction::E,
        }
    }
}

// ── GridSize ──────────────────────────────────────────────────────────────────

/// Width and height of the playing field, in cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    #[inline]
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// A `side × side` grid.
    #[inline]
    pub const fn square(side: u32) -> Self {
        Self { cols: side, rows: side }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.cols && (p.y as u32) < self.rows
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Row-major iterator over every cell.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        (0..self.rows as i32).flat_map(move |y| (0..self.cols as i32).map(move |x| Point::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::square(9)
    }
}
