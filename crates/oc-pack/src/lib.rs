//! `oc-pack` — load assignment suggestions.
//!
//! Given the day's parcels and the fleet, find the assignment of every
//! parcel to a vehicle that respects capacity and minimises an estimated
//! routing cost.  The search is exhaustive (`vehicles ^ parcels` leaves, 243
//! for the standard 3 × 5 day) and can be capped per call with
//! [`SearchLimits`].
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`estimate`] | `RouteEstimate` trait, `ManhattanEstimate`            |
//! | [`search`]   | `suggest_assignment`, `Suggestion`, `SearchLimits`    |

pub mod estimate;
pub mod search;

#[cfg(test)]
mod tests;

pub use estimate::{ManhattanEstimate, RouteEstimate, estimate_tiles};
pub use search::{SearchLimits, Suggestion, suggest_assignment, suggest_assignment_with};
