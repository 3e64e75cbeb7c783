//! Static game configuration.
//!
//! Supplied once at startup (the driver binary may load it from JSON with
//! the `serde` feature) and read-only afterwards.

use crate::cost::RateTable;
use crate::error::{CoreError, CoreResult};
use crate::goals::DailyGoals;
use crate::grid::{GridSize, Point};

/// Knobs of the obstacle generator.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleParams {
    /// Fraction of `side²` cells to block (0.22 → 17 obstacles on 9×9).
    pub density: f64,
    /// Rejection-sampling tries per obstacle before the slot is skipped.
    pub max_attempts: u32,
}

impl ObstacleParams {
    /// Number of obstacles the generator aims for on a `side × side` grid.
    #[inline]
    pub fn target_count(&self, side: u32) -> usize {
        (side as f64 * side as f64 * self.density).floor() as usize
    }
}

impl Default for ObstacleParams {
    fn default() -> Self {
        Self { density: 0.22, max_attempts: 50 }
    }
}

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub rates: RateTable,
    pub goals: DailyGoals,
    pub grid: GridSize,
    pub depot: Point,
    pub parcels_per_day: usize,
    pub obstacles: ObstacleParams,
    /// Segment budget is `segment_budget_base + seed % segment_budget_spread`.
    pub segment_budget_base: u32,
    pub segment_budget_spread: u32,
    /// Display distance of one segment, in metres.
    pub tile_metres: u32,
}

impl GameConfig {
    /// Maximum path segments for the day started with `seed`.
    pub fn segment_budget(&self, seed: u64) -> u32 {
        let spread = self.segment_budget_spread.max(1) as u64;
        self.segment_budget_base + (seed % spread) as u32
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.cols, self.grid.rows
            )));
        }
        if !self.grid.contains(self.depot) {
            return Err(CoreError::DepotOffGrid(self.depot));
        }
        if !(0.0..1.0).contains(&self.obstacles.density) {
            return Err(CoreError::Config(format!(
                "obstacle density must be in [0, 1), got {}",
                self.obstacles.density
            )));
        }
        if self.segment_budget_spread == 0 {
            return Err(CoreError::Config("segment_budget_spread must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            goals: DailyGoals::default(),
            grid: GridSize::square(9),
            depot: Point::new(1, 4),
            parcels_per_day: 5,
            obstacles: ObstacleParams::default(),
            segment_budget_base: 20,
            segment_budget_spread: 10,
            tile_metres: 20,
        }
    }
}
