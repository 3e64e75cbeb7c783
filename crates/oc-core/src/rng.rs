//! Injectable deterministic generators for obstacle and parcel placement.
//!
//! # Recurrence
//!
//! The reference generator is a 31-bit linear congruential generator:
//!
//!   state = (state * 1_103_515_245 + 12_345) mod 2^31
//!   u     = state / 2^31                          ∈ [0, 1)
//!
//! The multiplier and modulus are fixed so a day seed produces the same
//! obstacle field on every platform and in every port of the game.
//!
//! Consumers take `&mut impl DayRng` rather than a concrete type, so swapping
//! in [`rand::rngs::SmallRng`] (or anything else) is a one-line change at the
//! construction site.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MASK: u64 = 0x7fff_ffff;
const LCG_SCALE: f64 = (1u64 << 31) as f64;

/// Upper bound (exclusive) of randomly chosen day seeds.
pub const DAY_SEED_RANGE: u64 = 1_000_000;

// ── DayRng ────────────────────────────────────────────────────────────────────

/// A source of uniform samples in `[0, 1)`.
pub trait DayRng {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// `floor(u * n)` for the next sample `u`; always `< n` when `n > 0`.
    #[inline]
    fn pick_index(&mut self, n: usize) -> usize {
        ((self.next_unit() * n as f64) as usize).min(n.saturating_sub(1))
    }
}

// ── Lcg31 ─────────────────────────────────────────────────────────────────────

/// The reference 31-bit LCG described in the module docs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg31 {
    state: u64,
}

impl Lcg31 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance once and return the raw 31-bit state.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state as u32
    }
}

impl DayRng for Lcg31 {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_raw() as f64 / LCG_SCALE
    }
}

impl DayRng for SmallRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Seed a [`SmallRng`] for use as an alternative [`DayRng`].
pub fn small_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A fresh, non-deterministic day seed in `0..DAY_SEED_RANGE`.
pub fn random_day_seed() -> u64 {
    rand::thread_rng().gen_range(0..DAY_SEED_RANGE)
}
