//! Daily targets, running totals and the end-of-day grade.

use std::fmt;

use crate::cost::TripCost;

/// Pass thresholds for one day.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyGoals {
    /// Minutes available for all trips combined (6 hours by default).
    pub time_limit_min: u32,
    pub emission_limit: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self { time_limit_min: 360, emission_limit: 62 }
    }
}

/// Cumulative time and emissions for the current day.
///
/// Only ever grows within a day; reset to zero at day start.  Additions
/// saturate, so the totals never wrap back down.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTotals {
    pub time: u32,
    pub emissions: u32,
}

impl DailyTotals {
    #[inline]
    pub fn add(&mut self, cost: TripCost) {
        *self = self.with(cost);
    }

    /// Totals as they would be after a trip costing `cost`.
    #[inline]
    pub fn with(self, cost: TripCost) -> DailyTotals {
        DailyTotals {
            time:      self.time.saturating_add(cost.time),
            emissions: self.emissions.saturating_add(cost.emissions),
        }
    }

    pub fn rank(self, goals: &DailyGoals) -> Rank {
        Rank::grade(self, goals)
    }

    /// Share of each goal consumed, in whole percent, capped at 100.
    pub fn progress(self, goals: &DailyGoals) -> GoalProgress {
        GoalProgress {
            time_pct:     percent(self.time, goals.time_limit_min),
            emission_pct: percent(self.emissions, goals.emission_limit),
        }
    }
}

fn percent(used: u32, limit: u32) -> u32 {
    if limit == 0 {
        return if used == 0 { 0 } else { 100 };
    }
    ((used as f64 / limit as f64) * 100.0).round().min(100.0) as u32
}

/// Goal usage for progress bars.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalProgress {
    pub time_pct: u32,
    pub emission_pct: u32,
}

// ── Rank ──────────────────────────────────────────────────────────────────────

/// End-of-day grade.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    A,
    B,
    C,
    Fail,
}

impl Rank {
    /// A: both goals met.  B/C: either figure within 10 % / 25 % of its goal.
    pub fn grade(totals: DailyTotals, goals: &DailyGoals) -> Rank {
        let time = totals.time as f64;
        let emissions = totals.emissions as f64;
        let time_limit = goals.time_limit_min as f64;
        let emission_limit = goals.emission_limit as f64;

        if time <= time_limit && emissions <= emission_limit {
            Rank::A
        } else if time <= time_limit * 1.10 || emissions <= emission_limit * 1.10 {
            Rank::B
        } else if time <= time_limit * 1.25 || emissions <= emission_limit * 1.25 {
            Rank::C
        } else {
            Rank::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self != Rank::Fail
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::A    => "A",
            Rank::B    => "B",
            Rank::C    => "C",
            Rank::Fail => "Fail",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
