//! Backtracking search over every parcel → vehicle assignment.
//!
//! # Order and ties
//!
//! Parcels are decided in input order; for each parcel the vehicles are
//! tried in input order.  Leaves are therefore visited in lexicographic
//! order of the choice vector, and a leaf only replaces the incumbent when
//! its score is *strictly* lower, so the first minimum found wins.
//!
//! # Feasibility
//!
//! Capacity is checked at leaves only.  Every parcel must go somewhere, so a
//! parcel larger than every vehicle makes the whole search infeasible; the
//! result then carries `score = +∞` and empty loads.
//!
//! # Budget
//!
//! [`SearchLimits::max_leaves`] caps the number of leaves evaluated per
//! call.  When the cap is hit the best assignment found so far is returned
//! with `complete = false`.

use oc_core::{Parcel, ParcelId, Point, Vehicle, VehicleId};

use crate::estimate::{ManhattanEstimate, RouteEstimate};

/// Per-call work bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Stop after evaluating this many complete assignments.  `None` = no
    /// limit.
    pub max_leaves: Option<u64>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits { max_leaves: None };
}

/// The solver's proposal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// One entry per vehicle, in fleet order; parcels in input order.
    pub assignment: Vec<(VehicleId, Vec<ParcelId>)>,
    /// Estimated total tiles, or `f64::INFINITY` when nothing fits.
    pub score: f64,
    /// `false` when [`SearchLimits`] cut the search short.
    pub complete: bool,
    /// Leaves evaluated.
    pub leaves_visited: u64,
}

impl Suggestion {
    /// `false` for the "no feasible assignment" sentinel.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.score.is_finite()
    }

    /// Parcels proposed for `vehicle` (empty if unknown).
    pub fn parcels_for(&self, vehicle: VehicleId) -> &[ParcelId] {
        self.assignment
            .iter()
            .find(|(id, _)| *id == vehicle)
            .map(|(_, ps)| ps.as_slice())
            .unwrap_or(&[])
    }
}

/// Best assignment under the Manhattan estimate, searching exhaustively.
pub fn suggest_assignment(parcels: &[Parcel], vehicles: &[Vehicle], depot: Point) -> Suggestion {
    suggest_assignment_with(parcels, vehicles, depot, &ManhattanEstimate, SearchLimits::UNBOUNDED)
}

/// Best assignment under `estimate`, bounded by `limits`.
pub fn suggest_assignment_with<E: RouteEstimate>(
    parcels:  &[Parcel],
    vehicles: &[Vehicle],
    depot:    Point,
    estimate: &E,
    limits:   SearchLimits,
) -> Suggestion {
    let mut search = Search {
        parcels,
        vehicles,
        depot,
        estimate,
        limits,
        choice:      vec![0; parcels.len()],
        best:        None,
        leaves:      0,
        interrupted: false,
    };
    search.descend(0);

    let mut assignment: Vec<(VehicleId, Vec<ParcelId>)> =
        vehicles.iter().map(|v| (v.id, Vec::new())).collect();
    let score = match &search.best {
        Some((score, choice)) => {
            for (parcel, &vi) in parcels.iter().zip(choice) {
                assignment[vi].1.push(parcel.id);
            }
            *score as f64
        }
        None => f64::INFINITY,
    };

    Suggestion {
        assignment,
        score,
        complete: !search.interrupted,
        leaves_visited: search.leaves,
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

struct Search<'a, E: RouteEstimate> {
    parcels:  &'a [Parcel],
    vehicles: &'a [Vehicle],
    depot:    Point,
    estimate: &'a E,
    limits:   SearchLimits,
    /// `choice[i]` = index of the vehicle parcel `i` is assigned to.
    choice:   Vec<usize>,
    best:     Option<(u32, Vec<usize>)>,
    leaves:   u64,
    interrupted: bool,
}

impl<E: RouteEstimate> Search<'_, E> {
    fn descend(&mut self, i: usize) {
        if self.interrupted {
            return;
        }
        if i == self.parcels.len() {
            self.evaluate_leaf();
            return;
        }
        for vi in 0..self.vehicles.len() {
            self.choice[i] = vi;
            self.descend(i + 1);
            if self.interrupted {
                return;
            }
        }
    }

    fn evaluate_leaf(&mut self) {
        if self.limits.max_leaves.is_some_and(|max| self.leaves >= max) {
            self.interrupted = true;
            return;
        }
        self.leaves += 1;

        let mut score = 0;
        for (vi, vehicle) in self.vehicles.iter().enumerate() {
            let mut units = 0;
            let mut destinations = Vec::new();
            for (parcel, _) in self.parcels.iter().zip(&self.choice).filter(|&(_, &c)| c == vi) {
                units += parcel.units();
                destinations.push(parcel.destination);
            }
            if units > vehicle.capacity {
                return;
            }
            score += self.estimate.estimate(self.depot, &destinations);
        }

        if self.best.as_ref().is_none_or(|(best, _)| score < *best) {
            self.best = Some((score, self.choice.clone()));
        }
    }
}
