//! Vehicle classes and the per-tile cost model.
//!
//! Cost is linear in route length: a trip of `n` segments costs exactly `n`
//! times the class's per-tile rates.  Route length is always the segment
//! count of the drawn network, never its cell count.

use std::ops::{Add, AddAssign};

// ── VehicleClass ──────────────────────────────────────────────────────────────

/// The kind of vehicle a delivery is made with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleClass {
    /// Cargo bike: slow, zero emissions, tiny capacity.
    Cycle,
    /// Auto-rickshaw.
    Auto,
    /// Delivery van: fast, heavy emitter, large capacity.
    Van,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Cycle, VehicleClass::Auto, VehicleClass::Van];

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Cycle => "cycle",
            VehicleClass::Auto  => "auto",
            VehicleClass::Van   => "van",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rates ─────────────────────────────────────────────────────────────────────

/// Static per-class figures.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRates {
    /// Minutes spent per segment travelled.
    pub time_per_tile: u32,
    /// Emission units per segment travelled.
    pub emission_per_tile: u32,
    /// Maximum summed parcel size units.
    pub capacity: u32,
}

/// Rates for every [`VehicleClass`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateTable {
    pub cycle: VehicleRates,
    pub auto:  VehicleRates,
    pub van:   VehicleRates,
}

impl RateTable {
    #[inline]
    pub fn get(&self, class: VehicleClass) -> VehicleRates {
        match class {
            VehicleClass::Cycle => self.cycle,
            VehicleClass::Auto  => self.auto,
            VehicleClass::Van   => self.van,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            cycle: VehicleRates { time_per_tile: 3, emission_per_tile: 0, capacity: 1 },
            auto:  VehicleRates { time_per_tile: 2, emission_per_tile: 1, capacity: 3 },
            van:   VehicleRates { time_per_tile: 1, emission_per_tile: 3, capacity: 5 },
        }
    }
}

// ── TripCost ──────────────────────────────────────────────────────────────────

/// Time (minutes) and emissions incurred by one trip.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripCost {
    pub time: u32,
    pub emissions: u32,
}

impl Add for TripCost {
    type Output = TripCost;
    #[inline]
    fn add(self, rhs: TripCost) -> TripCost {
        TripCost {
            time:      self.time.saturating_add(rhs.time),
            emissions: self.emissions.saturating_add(rhs.emissions),
        }
    }
}

impl AddAssign for TripCost {
    #[inline]
    fn add_assign(&mut self, rhs: TripCost) {
        *self = *self + rhs;
    }
}

/// Cost of travelling `tiles` segments with `class` under `rates`.
///
/// Saturates at `u32::MAX` instead of wrapping.
#[inline]
pub fn trip_cost(class: VehicleClass, tiles: u32, rates: &RateTable) -> TripCost {
    let r = rates.get(class);
    TripCost {
        time:      tiles.saturating_mul(r.time_per_tile),
        emissions: tiles.saturating_mul(r.emission_per_tile),
    }
}

/// [`trip_cost`] with the default rate table.
pub fn compute_trip_cost(class: VehicleClass, tiles: u32) -> TripCost {
    trip_cost(class, tiles, &RateTable::default())
}
