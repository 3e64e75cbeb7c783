//! Daily parcel generation.
//!
//! A [`ParcelSource`] turns a day seed into that day's parcel list.  The
//! same seed must always yield the same parcels; obstacle placement depends
//! on their destinations.

use rand::rngs::SmallRng;

use oc_core::rng::small_rng;
use oc_core::{DayRng, DestinationKind, GameConfig, Lcg31, Parcel, ParcelId, ParcelSize, Point};

/// Produces the parcels for a day.
pub trait ParcelSource {
    fn generate(&mut self, seed: u64, config: &GameConfig) -> Vec<Parcel>;
}

// ── CyclicParcels ─────────────────────────────────────────────────────────────

/// The fixed arithmetic layout used by the standard game.
///
/// For parcel `i` (0-based):
///
/// - size: `[1, 2, 3][(seed + i) % 3]`
/// - destination: `(3 + (seed + i) % 5, 2 + (seed * (i + 3)) % 5)`
/// - kind: school, hospital, home by `i % 3`
/// - id: `p{i + 1}`
///
/// Destinations ignore the grid size, so they are only guaranteed on-grid
/// for grids of at least 8×7.
#[derive(Copy, Clone, Debug, Default)]
pub struct CyclicParcels;

impl ParcelSource for CyclicParcels {
    fn generate(&mut self, seed: u64, config: &GameConfig) -> Vec<Parcel> {
        (0..config.parcels_per_day)
            .map(|i| {
                let i = i as u64;
                let size = ParcelSize::CYCLE[((seed % 3 + i % 3) % 3) as usize];
                // Reduced mod 5 first so large seeds cannot overflow.
                let x = 3 + (seed % 5 + i % 5) % 5;
                let y = 2 + ((seed % 5) * ((i + 3) % 5)) % 5;
                let kind = DestinationKind::CYCLE[(i % 3) as usize];
                Parcel::new(ParcelId(i as u32 + 1), size, Point::new(x as i32, y as i32), kind)
            })
            .collect()
    }
}

// ── SeededParcels ─────────────────────────────────────────────────────────────

/// Random sizes and destinations drawn from a [`DayRng`] seeded per day.
///
/// Destinations are uniform over the grid and avoid the depot and each
/// other; after 50 colliding draws the last draw is kept as is.  Kinds follow
/// the same `i % 3` cycle as [`CyclicParcels`].
pub struct SeededParcels<R: DayRng> {
    make_rng: fn(u64) -> R,
}

impl<R: DayRng> SeededParcels<R> {
    pub fn new(make_rng: fn(u64) -> R) -> Self {
        Self { make_rng }
    }
}

impl SeededParcels<Lcg31> {
    pub fn lcg() -> Self {
        Self::new(Lcg31::new)
    }
}

impl SeededParcels<SmallRng> {
    pub fn small_rng() -> Self {
        Self::new(small_rng)
    }
}

/// Rejection-sampling tries per destination.
const MAX_DESTINATION_ATTEMPTS: u32 = 50;

impl<R: DayRng> ParcelSource for SeededParcels<R> {
    fn generate(&mut self, seed: u64, config: &GameConfig) -> Vec<Parcel> {
        let mut rng = (self.make_rng)(seed);
        let cols = config.grid.cols as usize;
        let rows = config.grid.rows as usize;
        let mut taken: Vec<Point> = Vec::with_capacity(config.parcels_per_day);

        (0..config.parcels_per_day)
            .map(|i| {
                let size = ParcelSize::CYCLE[rng.pick_index(3)];
                let mut destination = config.depot;
                for _ in 0..MAX_DESTINATION_ATTEMPTS {
                    let candidate =
                        Point::new(rng.pick_index(cols) as i32, rng.pick_index(rows) as i32);
                    destination = candidate;
                    if candidate != config.depot && !taken.contains(&candidate) {
                        break;
                    }
                }
                taken.push(destination);
                let kind = DestinationKind::CYCLE[i % 3];
                Parcel::new(ParcelId(i as u32 + 1), size, destination, kind)
            })
            .collect()
    }
}
