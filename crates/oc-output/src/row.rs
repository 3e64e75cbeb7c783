//! Plain data row types written by output backends.

use oc_core::{Rank, VehicleClass};
use oc_day::{DaySummary, TripRecord};

/// One recorded trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub day_seed:        u64,
    pub trip:            u32,
    pub vehicle_id:      u32,
    pub class:           VehicleClass,
    pub segments:        u32,
    pub metres:          u32,
    pub time:            u32,
    pub emissions:       u32,
    /// Day totals after this trip.
    pub total_time:      u32,
    pub total_emissions: u32,
}

impl From<&TripRecord> for TripRow {
    fn from(t: &TripRecord) -> Self {
        Self {
            day_seed:        t.day_seed,
            trip:            t.index,
            vehicle_id:      t.vehicle.get(),
            class:           t.class,
            segments:        t.segments,
            metres:          t.metres,
            time:            t.cost.time,
            emissions:       t.cost.emissions,
            total_time:      t.totals_after.time,
            total_emissions: t.totals_after.emissions,
        }
    }
}

/// End-of-day figures for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub day_seed:        u64,
    pub trips:           u32,
    pub segments:        u32,
    pub metres:          u32,
    pub total_time:      u32,
    pub total_emissions: u32,
    pub rank:            Rank,
}

impl From<&DaySummary> for DaySummaryRow {
    fn from(s: &DaySummary) -> Self {
        Self {
            day_seed:        s.day_seed,
            trips:           s.trips,
            segments:        s.segments,
            metres:          s.metres,
            total_time:      s.totals.time,
            total_emissions: s.totals.emissions,
            rank:            s.rank,
        }
    }
}
