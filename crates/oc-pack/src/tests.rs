//! Unit tests for oc-pack.

#[cfg(test)]
mod helpers {
    use oc_core::{
        DestinationKind, Parcel, ParcelId, ParcelSize, Point, RateTable, Vehicle, VehicleClass,
        VehicleId,
    };

    pub const DEPOT: Point = Point::new(1, 4);

    pub fn fleet() -> Vec<Vehicle> {
        let rates = RateTable::default();
        vec![
            Vehicle::new(VehicleId(1), VehicleClass::Cycle, &rates),
            Vehicle::new(VehicleId(2), VehicleClass::Auto, &rates),
            Vehicle::new(VehicleId(3), VehicleClass::Van, &rates),
        ]
    }

    pub fn parcel(id: u32, size: ParcelSize, x: i32, y: i32) -> Parcel {
        Parcel::new(ParcelId(id), size, Point::new(x, y), DestinationKind::Home)
    }

    /// The five parcels a day seeded with 0 produces.
    pub fn seed_zero_parcels() -> Vec<Parcel> {
        use ParcelSize::*;
        vec![
            parcel(1, Small, 3, 2),
            parcel(2, Medium, 4, 2),
            parcel(3, Large, 5, 2),
            parcel(4, Small, 6, 2),
            parcel(5, Medium, 7, 2),
        ]
    }
}

#[cfg(test)]
mod estimate {
    use oc_core::Point;

    use super::helpers::DEPOT;
    use crate::estimate_tiles;

    #[test]
    fn empty_group_costs_nothing() {
        assert_eq!(estimate_tiles(DEPOT, &[]), 0);
    }

    #[test]
    fn distance_plus_stop_penalty() {
        // 4 + 5 + 1 extra stop
        assert_eq!(estimate_tiles(DEPOT, &[Point::new(3, 2), Point::new(4, 2)]), 10);
        assert_eq!(estimate_tiles(DEPOT, &[Point::new(1, 4)]), 0);
    }
}

#[cfg(test)]
mod search {
    use oc_core::{ParcelId, ParcelSize, VehicleId};

    use super::helpers::{DEPOT, fleet, parcel, seed_zero_parcels};
    use crate::{ManhattanEstimate, SearchLimits, suggest_assignment, suggest_assignment_with};

    #[test]
    fn standard_day_optimum() {
        let s = suggest_assignment(&seed_zero_parcels(), &fleet(), DEPOT);
        assert!(s.is_available());
        assert!(s.complete);
        assert_eq!(s.score, 32.0);
        assert_eq!(s.leaves_visited, 243);
        assert_eq!(s.parcels_for(VehicleId(1)), &[ParcelId(1)]);
        assert_eq!(s.parcels_for(VehicleId(2)), &[ParcelId(2), ParcelId(4)]);
        assert_eq!(s.parcels_for(VehicleId(3)), &[ParcelId(3), ParcelId(5)]);
    }

    #[test]
    fn suggestion_respects_capacity() {
        let parcels = seed_zero_parcels();
        let vehicles = fleet();
        let s = suggest_assignment(&parcels, &vehicles, DEPOT);
        for v in &vehicles {
            let units: u32 = s
                .parcels_for(v.id)
                .iter()
                .map(|id| parcels.iter().find(|p| p.id == *id).unwrap().units())
                .sum();
            assert!(units <= v.capacity, "{} over capacity", v.id);
        }
    }

    #[test]
    fn every_parcel_assigned_exactly_once() {
        let s = suggest_assignment(&seed_zero_parcels(), &fleet(), DEPOT);
        let mut all: Vec<ParcelId> = s.assignment.iter().flat_map(|(_, ps)| ps.clone()).collect();
        all.sort();
        assert_eq!(all, (1..=5).map(ParcelId).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_total_is_infeasible() {
        // Units sum to 11 > 1 + 3 + 5.
        use ParcelSize::*;
        let parcels = vec![
            parcel(1, Medium, 5, 3),
            parcel(2, Large, 6, 5),
            parcel(3, Small, 7, 2),
            parcel(4, Medium, 3, 4),
            parcel(5, Large, 4, 6),
        ];
        let s = suggest_assignment(&parcels, &fleet(), DEPOT);
        assert!(!s.is_available());
        assert_eq!(s.score, f64::INFINITY);
        assert!(s.assignment.iter().all(|(_, ps)| ps.is_empty()));
        assert_eq!(s.assignment.len(), 3);
    }

    #[test]
    fn first_found_wins_ties() {
        let vehicles = vec![fleet()[2].clone(), {
            let mut twin = fleet()[2].clone();
            twin.id = VehicleId(9);
            twin
        }];
        let parcels = vec![parcel(1, ParcelSize::Small, 3, 4)];
        let s = suggest_assignment(&parcels, &vehicles, DEPOT);
        assert_eq!(s.parcels_for(VehicleId(3)), &[ParcelId(1)]);
        assert!(s.parcels_for(VehicleId(9)).is_empty());
    }

    #[test]
    fn no_parcels_scores_zero() {
        let s = suggest_assignment(&[], &fleet(), DEPOT);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.leaves_visited, 1);
    }

    #[test]
    fn no_vehicles_is_infeasible() {
        let s = suggest_assignment(&seed_zero_parcels(), &[], DEPOT);
        assert!(!s.is_available());
        assert!(s.assignment.is_empty());
    }

    #[test]
    fn leaf_cap_returns_best_so_far() {
        let limits = SearchLimits { max_leaves: Some(10) };
        let s = suggest_assignment_with(&seed_zero_parcels(), &fleet(), DEPOT, &ManhattanEstimate, limits);
        assert!(!s.complete);
        assert_eq!(s.leaves_visited, 10);
        // The first ten leaves all put parcels 1 and 2 on the cycle: none fit.
        assert!(!s.is_available());

        let generous = SearchLimits { max_leaves: Some(243) };
        let full = suggest_assignment_with(&seed_zero_parcels(), &fleet(), DEPOT, &ManhattanEstimate, generous);
        assert!(full.complete);
        assert_eq!(full.score, 32.0);
    }
}
