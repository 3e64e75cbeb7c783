//! Per-trip and per-day records handed to observers and output writers.

use oc_core::{DailyTotals, Rank, TripCost, VehicleClass, VehicleId};

/// One submitted vehicle trip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    /// Seed of the day the trip belongs to.
    pub day_seed: u64,
    /// 0-based position in the day's trip log.
    pub index: u32,
    pub vehicle: VehicleId,
    pub class: VehicleClass,
    /// Path length in segments (= tiles driven).
    pub segments: u32,
    pub cost: TripCost,
    /// `segments × tile_metres`.
    pub metres: u32,
    /// Day totals including this trip.
    pub totals_after: DailyTotals,
}

/// End-of-day figures, produced once every parcel is out and every
/// dispatched vehicle has driven.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub day_seed: u64,
    pub trips: u32,
    pub segments: u32,
    pub metres: u32,
    pub totals: DailyTotals,
    pub rank: Rank,
}
