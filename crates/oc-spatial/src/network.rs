//! The player-drawn route: a set of undirected unit segments.
//!
//! # Invariants
//!
//! - Every segment joins two Manhattan-adjacent cells.
//! - `(a, b)` and `(b, a)` are the same segment; at most one copy is stored.
//!   Segments are kept with their smaller endpoint first so equality and
//!   hashing are structural.
//! - `cells` is exactly the union of segment endpoints.  It is extended on
//!   insert and rebuilt from scratch on removal, never patched by hand.
//!
//! Route length (and therefore trip cost) is [`PathNetwork::len`], the
//! segment count.

use rustc_hash::FxHashSet;

use oc_core::Point;

// ── PathSegment ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An undirected edge between two adjacent cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    a: Point,
    b: Point,
}

impl PathSegment {
    /// `None` unless `a` and `b` are Manhattan-adjacent.
    pub fn new(a: Point, b: Point) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        Some(if a <= b { Self { a, b } } else { Self { a: b, b: a } })
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn endpoints(self) -> (Point, Point) {
        (self.a, self.b)
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        if self.a.y == self.b.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    #[inline]
    pub fn touches(self, p: Point) -> bool {
        self.a == p || self.b == p
    }

    /// The endpoint opposite `p`, if `p` is an endpoint.
    #[inline]
    pub fn other_end(self, p: Point) -> Option<Point> {
        if self.a == p {
            Some(self.b)
        } else if self.b == p {
            Some(self.a)
        } else {
            None
        }
    }
}

// ── PathNetwork ───────────────────────────────────────────────────────────────

/// Segments drawn for the trip in progress, plus the cells they touch.
#[derive(Clone, Debug, Default)]
pub struct PathNetwork {
    segments: Vec<PathSegment>,
    cells:    FxHashSet<Point>,
}

impl PathNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in drawing order.
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Every cell touched by at least one segment.
    #[inline]
    pub fn cells(&self) -> &FxHashSet<Point> {
        &self.cells
    }

    /// Segment count, i.e. the route length in tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains_segment(&self, a: Point, b: Point) -> bool {
        PathSegment::new(a, b).is_some_and(|s| self.segments.contains(&s))
    }

    #[inline]
    pub fn contains_cell(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Insert `(a, b)`.  Returns `false` (and changes nothing) when the cells
    /// are not adjacent or the segment is already present.
    pub fn insert(&mut self, a: Point, b: Point) -> bool {
        let Some(seg) = PathSegment::new(a, b) else {
            return false;
        };
        if self.segments.contains(&seg) {
            return false;
        }
        self.segments.push(seg);
        self.cells.insert(a);
        self.cells.insert(b);
        true
    }

    /// Remove `(a, b)` in either orientation.  Returns whether anything was
    /// removed.  Cells left without a segment drop out of [`cells`](Self::cells).
    pub fn remove(&mut self, a: Point, b: Point) -> bool {
        let Some(seg) = PathSegment::new(a, b) else {
            return false;
        };
        let before = self.segments.len();
        self.segments.retain(|s| *s != seg);
        if self.segments.len() == before {
            return false;
        }
        self.rebuild_cells();
        true
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.cells.clear();
    }

    fn rebuild_cells(&mut self) {
        self.cells.clear();
        for s in &self.segments {
            let (a, b) = s.endpoints();
            self.cells.insert(a);
            self.cells.insert(b);
        }
    }
}

/// Two networks are equal when they hold the same segments, in any order.
impl PartialEq for PathNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().all(|s| other.segments.contains(s))
    }
}

impl Eq for PathNetwork {}

impl FromIterator<(Point, Point)> for PathNetwork {
    fn from_iter<I: IntoIterator<Item = (Point, Point)>>(iter: I) -> Self {
        let mut net = PathNetwork::new();
        for (a, b) in iter {
            net.insert(a, b);
        }
        net
    }
}

// ── Value-style API ───────────────────────────────────────────────────────────

/// `network` plus `(a, b)`; an unchanged copy if the segment is invalid or
/// already present.
pub fn add_segment(network: &PathNetwork, a: Point, b: Point) -> PathNetwork {
    let mut next = network.clone();
    next.insert(a, b);
    next
}

/// `network` minus `(a, b)` in either orientation.
pub fn remove_segment(network: &PathNetwork, a: Point, b: Point) -> PathNetwork {
    let mut next = network.clone();
    next.remove(a, b);
    next
}
