//! Day observer trait for logging and data collection.

use log::{debug, info, warn};

use oc_core::Parcel;
use oc_spatial::ObstacleMap;

use crate::event::{DayEvent, EventOutcome};
use crate::trip::{DaySummary, TripRecord};

/// Callbacks invoked by
/// [`DayState::apply_observed`][crate::DayState::apply_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait DayObserver {
    /// Called after a new day has been generated.
    fn on_day_start(
        &mut self,
        _seed:         u64,
        _parcels:      &[Parcel],
        _obstacles:    &ObstacleMap,
        _max_segments: u32,
    ) {}

    /// Called after every event, including ignored and rejected ones.
    fn on_event(&mut self, _event: &DayEvent, _outcome: &EventOutcome) {}

    /// Called after a trip was appended to the log.
    fn on_trip_recorded(&mut self, _trip: &TripRecord) {}

    /// Called once per day, on the first event after which every parcel is
    /// out and no dispatched vehicle is still waiting for its trip.
    fn on_day_complete(&mut self, _summary: &DaySummary) {}
}

/// A [`DayObserver`] that does nothing.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}

/// A [`DayObserver`] that reports through the `log` facade.
///
/// Day boundaries and trips log at `info`, refused events at `warn` and
/// everything else at `debug`.
pub struct LogObserver;

impl DayObserver for LogObserver {
    fn on_day_start(
        &mut self,
        seed:         u64,
        parcels:      &[Parcel],
        obstacles:    &ObstacleMap,
        max_segments: u32,
    ) {
        info!(
            "day {seed}: {} parcels, {} obstacles, {max_segments} segments allowed",
            parcels.len(),
            obstacles.len(),
        );
    }

    fn on_event(&mut self, event: &DayEvent, outcome: &EventOutcome) {
        match outcome {
            EventOutcome::Ignored(why) => warn!("{} ignored: {why}", event.name()),
            EventOutcome::Rejected(err) => warn!("{} rejected: {err}", event.name()),
            other => debug!("{} -> {other:?}", event.name()),
        }
    }

    fn on_trip_recorded(&mut self, trip: &TripRecord) {
        info!(
            "trip {} by {} ({}): {} segments, {} m, +{} min, +{} emissions",
            trip.index,
            trip.vehicle,
            trip.class,
            trip.segments,
            trip.metres,
            trip.cost.time,
            trip.cost.emissions,
        );
    }

    fn on_day_complete(&mut self, summary: &DaySummary) {
        info!(
            "day {} complete: {} trips, {} min, {} emissions, rank {}",
            summary.day_seed,
            summary.trips,
            summary.totals.time,
            summary.totals.emissions,
            summary.rank,
        );
    }
}
