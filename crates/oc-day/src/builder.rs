//! Fluent builder for constructing a [`DayState`].

use log::info;

use oc_core::{DayRng, GameConfig, Lcg31, RateTable, Vehicle, VehicleClass, VehicleId};

use crate::parcels::{CyclicParcels, ParcelSource};
use crate::{DayError, DayResult, DayState};

/// One cycle, one auto and one van, ids 1 to 3.
pub fn standard_fleet(rates: &RateTable) -> Vec<Vehicle> {
    VehicleClass::ALL
        .iter()
        .zip(1..)
        .map(|(&class, id)| Vehicle::new(VehicleId(id), class, rates))
        .collect()
}

/// Fluent builder for [`DayState<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                              |
/// |----------------------|--------------------------------------|
/// | `.parcel_source(s)`  | [`CyclicParcels`]                    |
/// | `.vehicles(v)`       | [`standard_fleet`] for the rate table |
/// | `.seed(s)`           | Random seed                          |
/// | `.obstacle_rng(f)`   | [`Lcg31::new`]                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut day = DayBuilder::new(GameConfig::default()).seed(7).build()?;
/// day.apply(DayEvent::AssignParcel { parcel: ParcelId(1), vehicle: VehicleId(3) });
/// ```
pub struct DayBuilder<P: ParcelSource = CyclicParcels, G: DayRng = Lcg31> {
    config:       GameConfig,
    source:       P,
    obstacle_rng: fn(u64) -> G,
    vehicles:     Option<Vec<Vehicle>>,
    seed:         Option<u64>,
}

impl DayBuilder<CyclicParcels> {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            source:       CyclicParcels,
            obstacle_rng: Lcg31::new,
            vehicles:     None,
            seed:         None,
        }
    }
}

impl<P: ParcelSource, G: DayRng> DayBuilder<P, G> {
    /// Replace the parcel generator.
    pub fn parcel_source<Q: ParcelSource>(self, source: Q) -> DayBuilder<Q, G> {
        DayBuilder {
            config:       self.config,
            source,
            obstacle_rng: self.obstacle_rng,
            vehicles:     self.vehicles,
            seed:         self.seed,
        }
    }

    /// Replace the RNG that places obstacles.  It is rebuilt from the seed
    /// every day, so equal seeds still give equal layouts.
    pub fn obstacle_rng<H: DayRng>(self, make: fn(u64) -> H) -> DayBuilder<P, H> {
        DayBuilder {
            config:       self.config,
            source:       self.source,
            obstacle_rng: make,
            vehicles:     self.vehicles,
            seed:         self.seed,
        }
    }

    /// Supply the fleet.  Ids must be unique.
    pub fn vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = Some(vehicles);
        self
    }

    /// Seed of the first day.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs and return a state with the first day started.
    pub fn build(self) -> DayResult<DayState<P, G>> {
        self.config.validate()?;
        if self.config.grid.cols != self.config.grid.rows {
            return Err(DayError::Config(format!(
                "obstacle placement needs a square grid, got {}x{}",
                self.config.grid.cols, self.config.grid.rows
            )));
        }

        let vehicles = match self.vehicles {
            Some(v) => v,
            None => standard_fleet(&self.config.rates),
        };
        for (i, v) in vehicles.iter().enumerate() {
            if vehicles[..i].iter().any(|w| w.id == v.id) {
                return Err(DayError::DuplicateVehicle(v.id));
            }
        }

        let fleet = vehicles.len();
        let mut state = DayState::unstarted(self.config, self.source, self.obstacle_rng, vehicles);
        let seed = state.start_day(self.seed);
        info!("day engine ready: {fleet} vehicles, first day seed {seed}");
        Ok(state)
    }
}
