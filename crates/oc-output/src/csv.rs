//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv`
//! - `day_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, OutputResult, TripRow};

/// Writes day output to two CSV files.
pub struct CsvWriter {
    trips:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "day_seed",
            "trip",
            "vehicle_id",
            "class",
            "segments",
            "metres",
            "time",
            "emissions",
            "total_time",
            "total_emissions",
        ])?;

        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record([
            "day_seed",
            "trips",
            "segments",
            "metres",
            "total_time",
            "total_emissions",
            "rank",
        ])?;

        Ok(Self {
            trips,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.day_seed.to_string(),
            row.trip.to_string(),
            row.vehicle_id.to_string(),
            row.class.as_str().to_owned(),
            row.segments.to_string(),
            row.metres.to_string(),
            row.time.to_string(),
            row.emissions.to_string(),
            row.total_time.to_string(),
            row.total_emissions.to_string(),
        ])?;
        Ok(())
    }

    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day_seed.to_string(),
            row.trips.to_string(),
            row.segments.to_string(),
            row.metres.to_string(),
            row.total_time.to_string(),
            row.total_emissions.to_string(),
            row.rank.as_str().to_owned(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.trips.flush()?;
        self.summaries.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
