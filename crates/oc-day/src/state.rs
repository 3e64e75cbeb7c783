//! The [`DayState`] struct: one day of the delivery puzzle.

use log::debug;

use oc_core::{
    DailyTotals, DayRng, GameConfig, GoalProgress, GridSize, Lcg31, Parcel, ParcelId, Point, Rank,
    TripCost, Vehicle, VehicleId, load_units, random_day_seed, trip_cost,
};
use oc_pack::{Suggestion, suggest_assignment};
use oc_spatial::{DrawRules, ObstacleMap, PathNetwork, draw_segment, generate_obstacles_with, reachability};

use crate::event::{DayEvent, EventOutcome, Ignored};
use crate::observer::DayObserver;
use crate::parcels::{CyclicParcels, ParcelSource};
use crate::trip::{DaySummary, TripRecord};

/// Connectivity of the current path to a set of destinations.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectivityReport {
    pub connected: usize,
    pub total:     usize,
    /// Every destination reached and there was at least one.
    pub solved:    bool,
}

// ── DayState ──────────────────────────────────────────────────────────────────

/// All mutable game state, owned by the caller.
///
/// Vehicles and the tutorial flag survive across days; everything else is
/// regenerated by [`start_day`][Self::start_day].  Expected rule violations
/// (unknown ids, overflowing loads, blocked cells) leave the state untouched
/// and are reported through [`EventOutcome`].
///
/// Create via [`DayBuilder`][crate::DayBuilder].
pub struct DayState<P: ParcelSource = CyclicParcels, G: DayRng = Lcg31> {
    config:            GameConfig,
    source:            P,
    /// Builds the obstacle RNG from the day seed.
    obstacle_rng:      fn(u64) -> G,
    seed:              u64,
    tutorial_seen:     bool,
    parcels:           Vec<Parcel>,
    vehicles:          Vec<Vehicle>,
    totals:            DailyTotals,
    current_path:      PathNetwork,
    obstacles:         ObstacleMap,
    max_path_segments: u32,
    /// Dispatch order; never holds an id twice.
    dispatched:        Vec<VehicleId>,
    trips:             Vec<TripRecord>,
    /// Set once `on_day_complete` has fired for the current day.
    completion_reported: bool,
}

impl<P: ParcelSource, G: DayRng> DayState<P, G> {
    /// A state with no day started yet.
    pub(crate) fn unstarted(
        config: GameConfig,
        source: P,
        obstacle_rng: fn(u64) -> G,
        vehicles: Vec<Vehicle>,
    ) -> Self {
        Self {
            config,
            source,
            obstacle_rng,
            seed:                0,
            tutorial_seen:       false,
            parcels:             Vec::new(),
            vehicles,
            totals:              DailyTotals::default(),
            current_path:        PathNetwork::new(),
            obstacles:           ObstacleMap::default(),
            max_path_segments:   0,
            dispatched:          Vec::new(),
            trips:               Vec::new(),
            completion_reported: false,
        }
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Apply one event and report what happened.
    pub fn apply(&mut self, event: DayEvent) -> EventOutcome {
        match event {
            DayEvent::StartDay(seed) => EventOutcome::Started(self.start_day(seed)),
            DayEvent::SetTutorialSeen => {
                self.set_tutorial_seen();
                EventOutcome::Applied
            }
            DayEvent::AssignParcel { parcel, vehicle } => self.assign_parcel(parcel, vehicle),
            DayEvent::UnassignParcel { parcel, vehicle } => self.unassign_parcel(parcel, vehicle),
            DayEvent::DispatchVehicle(vehicle) => self.dispatch_vehicle(vehicle),
            DayEvent::RecordTrip { vehicle, segments } => self.record_trip(vehicle, segments),
            DayEvent::SetCurrentPath(network) => {
                self.set_current_path(network);
                EventOutcome::Applied
            }
            DayEvent::DrawSegment { a, b } => self.draw_segment(a, b),
            DayEvent::ApplySuggestion(suggestion) => self.apply_suggestion(&suggestion),
        }
    }

    /// [`apply`][Self::apply], then notify `observer`.
    pub fn apply_observed<O: DayObserver>(&mut self, event: DayEvent, observer: &mut O) -> EventOutcome {
        let trips_before = self.trips.len();
        let outcome = self.apply(event.clone());

        if let EventOutcome::Started(seed) = outcome {
            observer.on_day_start(seed, &self.parcels, &self.obstacles, self.max_path_segments);
        }
        observer.on_event(&event, &outcome);
        if self.trips.len() > trips_before {
            if let Some(trip) = self.trips.last() {
                observer.on_trip_recorded(trip);
            }
        }
        if !self.completion_reported && self.is_day_finished() {
            self.completion_reported = true;
            observer.on_day_complete(&self.summary());
        }
        outcome
    }

    /// Begin a new day and return its seed.
    ///
    /// Regenerates parcels, obstacles and the segment budget from the seed;
    /// clears loads, totals, dispatches, trips and the current path.
    pub fn start_day(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(random_day_seed);

        self.parcels = self.source.generate(seed, &self.config);
        let destinations: Vec<Point> = self.parcels.iter().map(|p| p.destination).collect();
        let mut rng = (self.obstacle_rng)(seed);
        self.obstacles = ObstacleMap::new(generate_obstacles_with(
            &mut rng,
            self.config.grid.cols,
            &self.config.obstacles,
            self.config.depot,
            &destinations,
        ));
        self.max_path_segments = self.config.segment_budget(seed);

        self.seed = seed;
        self.totals = DailyTotals::default();
        self.vehicles.iter_mut().for_each(Vehicle::clear_load);
        self.dispatched.clear();
        self.trips.clear();
        self.current_path.clear();
        self.completion_reported = false;

        debug!(
            "generated day {seed}: {} parcels, {} obstacles",
            self.parcels.len(),
            self.obstacles.len(),
        );
        seed
    }

    pub fn set_tutorial_seen(&mut self) {
        self.tutorial_seen = true;
    }

    /// Move `parcel` onto `vehicle`, taking it off any other vehicle.
    ///
    /// All-or-nothing: an unknown id or a load over capacity keeps every
    /// vehicle's load as it was.
    pub fn assign_parcel(&mut self, parcel: ParcelId, vehicle: VehicleId) -> EventOutcome {
        let Some(units) = self.parcel(parcel).map(Parcel::units) else {
            return EventOutcome::Ignored(Ignored::UnknownParcel(parcel));
        };
        let Some(vi) = self.vehicle_index(vehicle) else {
            return EventOutcome::Ignored(Ignored::UnknownVehicle(vehicle));
        };

        let target = &self.vehicles[vi];
        let mut load = load_units(target, &self.parcels) + units;
        if target.carries(parcel) {
            load -= units;
        }
        if load > target.capacity {
            return EventOutcome::Ignored(Ignored::OverCapacity {
                vehicle,
                load,
                capacity: target.capacity,
            });
        }

        for v in &mut self.vehicles {
            v.unload(parcel);
        }
        self.vehicles[vi].load(parcel);
        EventOutcome::Applied
    }

    /// Take `parcel` off `vehicle`.
    pub fn unassign_parcel(&mut self, parcel: ParcelId, vehicle: VehicleId) -> EventOutcome {
        let Some(vi) = self.vehicle_index(vehicle) else {
            return EventOutcome::Ignored(Ignored::UnknownVehicle(vehicle));
        };
        if self.vehicles[vi].unload(parcel) {
            EventOutcome::Applied
        } else {
            EventOutcome::Ignored(Ignored::NotLoaded { parcel, vehicle })
        }
    }

    /// Mark a loaded vehicle as sent out.  Its load is kept.
    pub fn dispatch_vehicle(&mut self, vehicle: VehicleId) -> EventOutcome {
        let Some(v) = self.vehicle(vehicle) else {
            return EventOutcome::Ignored(Ignored::UnknownVehicle(vehicle));
        };
        if v.is_empty() {
            return EventOutcome::Ignored(Ignored::EmptyVehicle(vehicle));
        }
        if self.is_dispatched(vehicle) {
            return EventOutcome::Ignored(Ignored::AlreadyDispatched(vehicle));
        }
        self.dispatched.push(vehicle);
        EventOutcome::Applied
    }

    /// Charge a trip of `segments` tiles to the day and clear the current
    /// path.
    pub fn record_trip(&mut self, vehicle: VehicleId, segments: u32) -> EventOutcome {
        let Some(class) = self.vehicle(vehicle).map(|v| v.class) else {
            return EventOutcome::Ignored(Ignored::UnknownVehicle(vehicle));
        };

        let cost = trip_cost(class, segments, &self.config.rates);
        self.totals.add(cost);
        self.trips.push(TripRecord {
            day_seed:     self.seed,
            index:        self.trips.len() as u32,
            vehicle,
            class,
            segments,
            cost,
            metres:       segments.saturating_mul(self.config.tile_metres),
            totals_after: self.totals,
        });
        self.current_path.clear();
        EventOutcome::Applied
    }

    pub fn set_current_path(&mut self, network: PathNetwork) {
        self.current_path = network;
    }

    /// Toggle the segment `(a, b)` on the current path.
    ///
    /// Refused when either end is off the grid or blocked, the cells are not
    /// neighbours, or an insertion would exceed the day's segment budget.
    pub fn draw_segment(&mut self, a: Point, b: Point) -> EventOutcome {
        let rules = DrawRules {
            grid:         self.config.grid,
            obstacles:    &self.obstacles,
            max_segments: self.max_path_segments,
        };
        match draw_segment(&mut self.current_path, a, b, &rules) {
            Ok(edit) => EventOutcome::Drawn(edit),
            Err(err) => EventOutcome::Rejected(err),
        }
    }

    /// Clear every load, then load each vehicle as `suggestion` proposes.
    ///
    /// An unavailable suggestion changes nothing.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) -> EventOutcome {
        if !suggestion.is_available() {
            return EventOutcome::Ignored(Ignored::NoSuggestion);
        }
        self.vehicles.iter_mut().for_each(Vehicle::clear_load);
        for (vehicle, parcels) in &suggestion.assignment {
            for &parcel in parcels {
                self.assign_parcel(parcel, *vehicle);
            }
        }
        EventOutcome::Applied
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The solver's best assignment for today's parcels and the fleet.
    pub fn suggest(&self) -> Suggestion {
        suggest_assignment(&self.parcels, &self.vehicles, self.config.depot)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tutorial_seen(&self) -> bool {
        self.tutorial_seen
    }

    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    pub fn depot(&self) -> Point {
        self.config.depot
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn parcel(&self, id: ParcelId) -> Option<&Parcel> {
        self.parcels.iter().find(|p| p.id == id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    fn vehicle_index(&self, id: VehicleId) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }

    pub fn totals(&self) -> DailyTotals {
        self.totals
    }

    pub fn current_path(&self) -> &PathNetwork {
        &self.current_path
    }

    pub fn obstacles(&self) -> &ObstacleMap {
        &self.obstacles
    }

    pub fn max_path_segments(&self) -> u32 {
        self.max_path_segments
    }

    /// Dispatched vehicles in dispatch order.
    pub fn dispatched(&self) -> &[VehicleId] {
        &self.dispatched
    }

    pub fn is_dispatched(&self, vehicle: VehicleId) -> bool {
        self.dispatched.contains(&vehicle)
    }

    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Summed units loaded on `vehicle`, or `None` if unknown.
    pub fn load_units(&self, vehicle: VehicleId) -> Option<u32> {
        self.vehicle(vehicle).map(|v| load_units(v, &self.parcels))
    }

    /// Whether [`assign_parcel`][Self::assign_parcel] would accept the move.
    pub fn can_load(&self, parcel: ParcelId, vehicle: VehicleId) -> bool {
        let (Some(p), Some(v)) = (self.parcel(parcel), self.vehicle(vehicle)) else {
            return false;
        };
        let mut load = load_units(v, &self.parcels) + p.units();
        if v.carries(parcel) {
            load -= p.units();
        }
        load <= v.capacity
    }

    /// Destinations of the parcels on `vehicle`, in loading order.
    pub fn destinations_for(&self, vehicle: VehicleId) -> Vec<Point> {
        let Some(v) = self.vehicle(vehicle) else {
            return Vec::new();
        };
        v.loaded
            .iter()
            .filter_map(|id| self.parcel(*id))
            .map(|p| p.destination)
            .collect()
    }

    /// Every parcel sits on a dispatched vehicle.  True for a day with no
    /// parcels.
    pub fn is_day_complete(&self) -> bool {
        self.parcels.iter().all(|p| {
            self.vehicles
                .iter()
                .find(|v| v.carries(p.id))
                .is_some_and(|v| self.is_dispatched(v.id))
        })
    }

    /// Loaded vehicles that have not been dispatched.
    pub fn undispatched_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| !v.is_empty() && !self.is_dispatched(v.id))
            .collect()
    }

    /// Dispatched vehicles with no recorded trip yet.
    pub fn pending_trips(&self) -> Vec<VehicleId> {
        self.dispatched
            .iter()
            .copied()
            .filter(|id| !self.trips.iter().any(|t| t.vehicle == *id))
            .collect()
    }

    /// Complete, and every dispatched vehicle has driven.
    pub fn is_day_finished(&self) -> bool {
        self.is_day_complete() && self.pending_trips().is_empty()
    }

    /// How many of `targets` the current path links to the depot.
    pub fn check_connectivity(&self, targets: &[Point]) -> ConnectivityReport {
        let reach = reachability(&self.current_path, self.config.depot, targets);
        ConnectivityReport {
            connected: reach.connected_count(),
            total:     reach.total,
            solved:    reach.total > 0 && reach.all_reached(),
        }
    }

    /// The subset of `targets` the current path links to the depot.
    pub fn connected_destinations(&self, targets: &[Point]) -> Vec<Point> {
        reachability(&self.current_path, self.config.depot, targets).connected
    }

    /// Cost `vehicle` would incur driving the current path.
    pub fn trip_preview(&self, vehicle: VehicleId) -> Option<TripCost> {
        let v = self.vehicle(vehicle)?;
        Some(trip_cost(v.class, self.current_path.len() as u32, &self.config.rates))
    }

    /// Goal usage if `vehicle` drove the current path now.
    pub fn goal_progress(&self, vehicle: VehicleId) -> Option<GoalProgress> {
        let preview = self.trip_preview(vehicle)?;
        Some(self.totals.with(preview).progress(&self.config.goals))
    }

    pub fn rank(&self) -> Rank {
        self.totals.rank(&self.config.goals)
    }

    /// Figures for the end-of-day report.
    pub fn summary(&self) -> DaySummary {
        let segments = self.trips.iter().fold(0u32, |acc, t| acc.saturating_add(t.segments));
        DaySummary {
            day_seed: self.seed,
            trips:    self.trips.len() as u32,
            segments,
            metres:   segments.saturating_mul(self.config.tile_metres),
            totals:   self.totals,
            rank:     self.rank(),
        }
    }
}
