//! Tests for oc-output.

#[cfg(test)]
mod csv_tests {
    use oc_core::{Rank, VehicleClass};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DaySummaryRow, TripRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trip_row(trip: u32) -> TripRow {
        TripRow {
            day_seed:        9,
            trip,
            vehicle_id:      2,
            class:           VehicleClass::Auto,
            segments:        10,
            metres:          200,
            time:            20,
            emissions:       10,
            total_time:      20 * (trip + 1),
            total_emissions: 10 * (trip + 1),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.csv").exists());
        assert!(dir.path().join("day_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("today");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("trips.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "day_seed", "trip", "vehicle_id", "class", "segments", "metres", "time",
                "emissions", "total_time", "total_emissions",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("day_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["day_seed", "trips", "segments", "metres", "total_time", "total_emissions", "rank"]
        );
    }

    #[test]
    fn csv_trip_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trip(&trip_row(0)).unwrap();
        w.write_trip(&trip_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "9");    // day_seed
        assert_eq!(&rows[0][3], "auto"); // class
        assert_eq!(&rows[1][1], "1");    // trip
        assert_eq!(&rows[1][8], "40");   // total_time
    }

    #[test]
    fn csv_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_day_summary(&DaySummaryRow {
            day_seed:        4,
            trips:           3,
            segments:        26,
            metres:          520,
            total_time:      44,
            total_emissions: 46,
            rank:            Rank::A,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("day_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "520");
        assert_eq!(&rows[0][6], "A");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use oc_core::{GameConfig, VehicleId};
    use oc_day::{DayBuilder, DayEvent, DayObserver, DaySummary, TripRecord};
    use tempfile::TempDir;

    use crate::{CsvWriter, DayOutputObserver, DaySummaryRow, OutputError, OutputResult, OutputWriter, TripRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Plays seed 0 with the solver's loading and one trip per vehicle.
    fn play_day<O: DayObserver>(obs: &mut O) {
        let mut day = DayBuilder::new(GameConfig::default()).seed(0).build().unwrap();
        let suggestion = day.suggest();
        day.apply_observed(DayEvent::ApplySuggestion(suggestion), obs);
        for (id, segments) in [(1, 4), (2, 10), (3, 12)] {
            let vehicle = VehicleId(id);
            day.apply_observed(DayEvent::DispatchVehicle(vehicle), obs);
            day.apply_observed(DayEvent::RecordTrip { vehicle, segments }, obs);
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = DayOutputObserver::new(writer);
        play_day(&mut obs);
        obs.finish();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        let trips: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(trips.len(), 3);
        assert_eq!(&trips[2][3], "van");
        assert_eq!(&trips[2][8], "44");
        assert_eq!(&trips[2][9], "46");

        let mut rdr = csv::Reader::from_path(dir.path().join("day_summaries.csv")).unwrap();
        let days: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(days.len(), 1);
        assert_eq!(&days[0][1], "3");   // trips
        assert_eq!(&days[0][2], "26");  // segments
        assert_eq!(&days[0][6], "A");   // rank
    }

    #[test]
    fn rows_mirror_records() {
        let trip = TripRecord {
            day_seed:     5,
            index:        1,
            vehicle:      VehicleId(3),
            class:        oc_core::VehicleClass::Van,
            segments:     7,
            cost:         oc_core::TripCost { time: 7, emissions: 21 },
            metres:       140,
            totals_after: oc_core::DailyTotals { time: 30, emissions: 40 },
        };
        let row = TripRow::from(&trip);
        assert_eq!(row.vehicle_id, 3);
        assert_eq!(row.emissions, 21);
        assert_eq!(row.total_emissions, 40);

        let summary = DaySummary {
            day_seed: 5,
            trips:    1,
            segments: 7,
            metres:   140,
            totals:   trip.totals_after,
            rank:     oc_core::Rank::A,
        };
        assert_eq!(DaySummaryRow::from(&summary).total_time, 30);
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:    usize,
        calls: usize,
    }

    impl OutputWriter for Flaky {
        fn write_trip(&mut self, _: &TripRow) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                return Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))));
            }
            Ok(())
        }
        fn write_day_summary(&mut self, _: &DaySummaryRow) -> OutputResult<()> {
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = DayOutputObserver::new(Flaky { ok: 1, calls: 0 });
        play_day(&mut obs);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("write 2"), "got {err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
