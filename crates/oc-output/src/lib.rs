//! `oc-output` — day output writers for `ozone_express`.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `trips.csv`, `day_summaries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`DayOutputObserver`], which implements `oc_day::DayObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oc_output::{CsvWriter, DayOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DayOutputObserver::new(writer);
//! day.apply_observed(DayEvent::RecordTrip { vehicle, segments }, &mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DayOutputObserver;
pub use row::{DaySummaryRow, TripRow};
pub use writer::OutputWriter;
