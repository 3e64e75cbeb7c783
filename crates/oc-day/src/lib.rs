//! `oc-day` — the day state machine for `ozone_express`.
//!
//! # Flow of a day
//!
//! ```text
//! StartDay(seed)      parcels, obstacles and segment budget from the seed
//! AssignParcel ...    load vehicles by hand, or ApplySuggestion(solver)
//! DispatchVehicle(v)  send a loaded vehicle out
//! DrawSegment ...     build the vehicle's route on the current path
//! RecordTrip(v, n)    charge n tiles to the day and clear the path
//! ```
//!
//! The day is complete once every parcel sits on a dispatched vehicle, and
//! finished once every dispatched vehicle has also recorded its trip.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oc_core::GameConfig;
//! use oc_day::{DayBuilder, DayEvent, LogObserver};
//!
//! let mut day = DayBuilder::new(GameConfig::default()).seed(0).build()?;
//! let suggestion = day.suggest();
//! day.apply_observed(DayEvent::ApplySuggestion(suggestion), &mut LogObserver);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod parcels;
pub mod state;
pub mod trip;


pub use builder::{DayBuilder, standard_fleet};
pub use error::{DayError, DayResult};
pub use event::{DayEvent, EventOutcome, Ignored};
pub use observer::{DayObserver, LogObserver, NoopObserver};
pub use parcels::{CyclicParcels, ParcelSource, SeededParcels};
pub use state::{ConnectivityReport, DayState};
pub use trip::{DaySummary, TripRecord};
