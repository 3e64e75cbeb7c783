//! `oc-core` — foundational types for the `ozone_express` delivery puzzle.
//!
//! This crate is a dependency of every other `oc-*` crate.  It has no `oc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`grid`]      | `Point`, `Direction`, `GridSize`                        |
//! | [`ids`]       | `ParcelId`, `VehicleId`                                 |
//! | [`rng`]       | `DayRng` trait, `Lcg31`, `random_day_seed`              |
//! | [`cost`]      | `VehicleClass`, `VehicleRates`, `RateTable`, `TripCost` |
//! | [`fleet`]     | `Parcel`, `Vehicle` and their attribute enums           |
//! | [`goals`]     | `DailyGoals`, `DailyTotals`, `Rank`                     |
//! | [`config`]    | `GameConfig`, `ObstacleParams`                          |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod fleet;
pub mod goals;
pub mod grid;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GameConfig, ObstacleParams};
pub use cost::{RateTable, TripCost, VehicleClass, VehicleRates, compute_trip_cost, trip_cost};
pub use error::{CoreError, CoreResult};
pub use fleet::{DestinationKind, Parcel, ParcelSize, Tint, Urgency, Vehicle, load_units};
pub use goals::{DailyGoals, DailyTotals, GoalProgress, Rank};
pub use grid::{Direction, GridSize, Point};
pub use ids::{ParcelId, VehicleId};
pub use rng::{DayRng, Lcg31, random_day_seed};
