//! Parcels and vehicles.
//!
//! Parcels are regenerated every day and never mutated afterwards.  Vehicles
//! persist across days; only their load list changes.  The load list keeps
//! insertion order (for display) but never holds the same id twice.

use crate::cost::{RateTable, VehicleClass};
use crate::grid::Point;
use crate::ids::{ParcelId, VehicleId};

// ── Parcel attributes ─────────────────────────────────────────────────────────

/// Parcel size in capacity units.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParcelSize {
    Small  = 1,
    Medium = 2,
    Large  = 3,
}

impl ParcelSize {
    /// Sizes in cycle order (used by the placeholder parcel generator).
    pub const CYCLE: [ParcelSize; 3] = [ParcelSize::Small, ParcelSize::Medium, ParcelSize::Large];

    #[inline]
    pub fn units(self) -> u32 {
        self as u32
    }

    pub fn tint(self) -> Tint {
        match self {
            ParcelSize::Small  => Tint::Green,
            ParcelSize::Medium => Tint::Blue,
            ParcelSize::Large  => Tint::Red,
        }
    }

    pub fn urgency(self) -> Urgency {
        match self {
            ParcelSize::Small  => Urgency::Low,
            ParcelSize::Medium => Urgency::Normal,
            ParcelSize::Large  => Urgency::Urgent,
        }
    }
}

/// Label colour printed on the parcel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tint {
    Green,
    Blue,
    Red,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Urgency {
    Urgent,
    Normal,
    Low,
}

/// What kind of building the parcel is addressed to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DestinationKind {
    School,
    Hospital,
    Home,
}

impl DestinationKind {
    pub const CYCLE: [DestinationKind; 3] =
        [DestinationKind::School, DestinationKind::Hospital, DestinationKind::Home];
}

// ── Parcel ────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub id: ParcelId,
    pub size: ParcelSize,
    pub tint: Tint,
    pub destination: Point,
    pub destination_kind: DestinationKind,
    pub urgency: Urgency,
    pub description: Option<String>,
}

impl Parcel {
    /// Build a parcel whose tint and urgency follow from its size.
    pub fn new(id: ParcelId, size: ParcelSize, destination: Point, destination_kind: DestinationKind) -> Self {
        Self {
            id,
            size,
            tint: size.tint(),
            destination,
            destination_kind,
            urgency: size.urgency(),
            description: None,
        }
    }

    #[inline]
    pub fn units(&self) -> u32 {
        self.size.units()
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    pub class: VehicleClass,
    pub capacity: u32,
    /// Loaded parcel ids in loading order.  Never contains duplicates.
    pub loaded: Vec<ParcelId>,
}

impl Vehicle {
    /// An empty vehicle with the capacity `rates` assigns to `class`.
    pub fn new(id: VehicleId, class: VehicleClass, rates: &RateTable) -> Self {
        Self {
            id,
            class,
            capacity: rates.get(class).capacity,
            loaded: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    #[inline]
    pub fn carries(&self, parcel: ParcelId) -> bool {
        self.loaded.contains(&parcel)
    }

    /// Append `parcel` unless already loaded.  Capacity is the caller's
    /// concern.
    pub fn load(&mut self, parcel: ParcelId) {
        if !self.carries(parcel) {
            self.loaded.push(parcel);
        }
    }

    /// Remove `parcel`; returns whether it was present.
    pub fn unload(&mut self, parcel: ParcelId) -> bool {
        let before = self.loaded.len();
        self.loaded.retain(|&p| p != parcel);
        self.loaded.len() != before
    }

    pub fn clear_load(&mut self) {
        self.loaded.clear();
    }
}

/// Summed size units of the parcels loaded on `vehicle`.
///
/// Ids that do not appear in `parcels` contribute nothing.
pub fn load_units(vehicle: &Vehicle, parcels: &[Parcel]) -> u32 {
    vehicle
        .loaded
        .iter()
        .filter_map(|id| parcels.iter().find(|p| p.id == *id))
        .map(Parcel::units)
        .sum()
}
