//! Day events and their outcomes.
//!
//! Every state change of a [`DayState`][crate::DayState] can be expressed as
//! a [`DayEvent`] and applied through
//! [`DayState::apply`][crate::DayState::apply].  The outcome says what
//! happened; an event that cannot be honoured leaves the state untouched.

use std::fmt;

use oc_core::{ParcelId, Point, VehicleId};
use oc_pack::Suggestion;
use oc_spatial::{EditOutcome, PathNetwork, SpatialError};

/// A requested change to the day.
#[derive(Clone, Debug, PartialEq)]
pub enum DayEvent {
    /// Begin a new day.  `None` picks a random seed.
    StartDay(Option<u64>),
    SetTutorialSeen,
    AssignParcel { parcel: ParcelId, vehicle: VehicleId },
    UnassignParcel { parcel: ParcelId, vehicle: VehicleId },
    DispatchVehicle(VehicleId),
    /// Submit a trip of `segments` tiles for `vehicle`.
    RecordTrip { vehicle: VehicleId, segments: u32 },
    SetCurrentPath(PathNetwork),
    /// Toggle one segment of the current path under the drawing rules.
    DrawSegment { a: Point, b: Point },
    /// Replace every load with the solver's proposal.
    ApplySuggestion(Suggestion),
}

impl DayEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DayEvent::StartDay(_)             => "start_day",
            DayEvent::SetTutorialSeen         => "set_tutorial_seen",
            DayEvent::AssignParcel { .. }     => "assign_parcel",
            DayEvent::UnassignParcel { .. }   => "unassign_parcel",
            DayEvent::DispatchVehicle(_)      => "dispatch_vehicle",
            DayEvent::RecordTrip { .. }       => "record_trip",
            DayEvent::SetCurrentPath(_)       => "set_current_path",
            DayEvent::DrawSegment { .. }      => "draw_segment",
            DayEvent::ApplySuggestion(_)      => "apply_suggestion",
        }
    }
}

/// Why an event changed nothing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Ignored {
    UnknownParcel(ParcelId),
    UnknownVehicle(VehicleId),
    /// The parcel would push the vehicle past its capacity.
    OverCapacity { vehicle: VehicleId, load: u32, capacity: u32 },
    /// The parcel was not on that vehicle.
    NotLoaded { parcel: ParcelId, vehicle: VehicleId },
    /// Empty vehicles cannot be dispatched.
    EmptyVehicle(VehicleId),
    AlreadyDispatched(VehicleId),
    /// The suggestion has no feasible assignment.
    NoSuggestion,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::UnknownParcel(p)  => write!(f, "unknown parcel {p}"),
            Ignored::UnknownVehicle(v) => write!(f, "unknown vehicle {v}"),
            Ignored::OverCapacity { vehicle, load, capacity } => {
                write!(f, "{vehicle} would carry {load} of {capacity} units")
            }
            Ignored::NotLoaded { parcel, vehicle } => write!(f, "{parcel} is not on {vehicle}"),
            Ignored::EmptyVehicle(v)      => write!(f, "{v} is empty"),
            Ignored::AlreadyDispatched(v) => write!(f, "{v} is already dispatched"),
            Ignored::NoSuggestion         => f.write_str("no feasible suggestion"),
        }
    }
}

/// Result of applying one [`DayEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// A new day began with this seed.
    Started(u64),
    Applied,
    /// A drawing edit was accepted.
    Drawn(EditOutcome),
    /// Nothing changed.
    Ignored(Ignored),
    /// A drawing edit was refused.
    Rejected(SpatialError),
}

impl EventOutcome {
    /// `true` when the event changed the state.
    pub fn changed(&self) -> bool {
        matches!(self, EventOutcome::Started(_) | EventOutcome::Applied | EventOutcome::Drawn(_))
    }
}
