//! Deterministic obstacle placement.
//!
//! For a `side × side` grid the generator aims for
//! `floor(density × side²)` obstacles.  Each slot draws `x`, then `y`, until
//! it hits a free cell or runs out of attempts; a free hit then draws the
//! obstacle kind.  Slots that exhaust their attempts are skipped, so crowded
//! boards may end up with fewer obstacles than the target.
//!
//! The depot and every destination start out occupied, and each placed
//! obstacle occupies its cell, so obstacles never overlap those cells or
//! each other.

use rustc_hash::{FxHashMap, FxHashSet};

use oc_core::{DayRng, Lcg31, ObstacleParams, Point};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleKind {
    Building,
    Water,
    Construction,
}

impl ObstacleKind {
    /// Draw order used by the generator.
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Building, ObstacleKind::Water, ObstacleKind::Construction];
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub pos: Point,
    pub kind: ObstacleKind,
}

/// Generate obstacles with the reference [`Lcg31`] seeded from `seed` and
/// default [`ObstacleParams`].
pub fn generate_obstacles(seed: u64, side: u32, depot: Point, destinations: &[Point]) -> Vec<Obstacle> {
    let mut rng = Lcg31::new(seed);
    generate_obstacles_with(&mut rng, side, &ObstacleParams::default(), depot, destinations)
}

/// Generate obstacles drawing from any [`DayRng`].
pub fn generate_obstacles_with<R: DayRng>(
    rng:          &mut R,
    side:         u32,
    params:       &ObstacleParams,
    depot:        Point,
    destinations: &[Point],
) -> Vec<Obstacle> {
    let mut occupied: FxHashSet<Point> = FxHashSet::default();
    occupied.insert(depot);
    occupied.extend(destinations.iter().copied());

    let target = params.target_count(side);
    let side = side as usize;
    let mut obstacles = Vec::with_capacity(target);

    if side == 0 {
        return obstacles;
    }

    for _ in 0..target {
        for _ in 0..params.max_attempts {
            let x = rng.pick_index(side) as i32;
            let y = rng.pick_index(side) as i32;
            let pos = Point::new(x, y);
            if occupied.insert(pos) {
                let kind = ObstacleKind::ALL[rng.pick_index(ObstacleKind::ALL.len())];
                obstacles.push(Obstacle { pos, kind });
                break;
            }
        }
    }

    obstacles
}

// ── ObstacleMap ───────────────────────────────────────────────────────────────

/// Point-keyed lookup over a day's obstacles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleMap {
    list:    Vec<Obstacle>,
    by_cell: FxHashMap<Point, ObstacleKind>,
}

impl ObstacleMap {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        let by_cell = obstacles.iter().map(|o| (o.pos, o.kind)).collect();
        Self { list: obstacles, by_cell }
    }

    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.by_cell.contains_key(&p)
    }

    pub fn at(&self, p: Point) -> Option<Obstacle> {
        self.by_cell.get(&p).map(|&kind| Obstacle { pos: p, kind })
    }

    /// Obstacles in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
