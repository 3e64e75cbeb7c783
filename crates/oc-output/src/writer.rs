//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DaySummaryRow, OutputResult, TripRow};

/// Trait implemented by output backends.
///
/// The observer driving a writer stores errors internally; retrieve them
/// with [`DayOutputObserver::take_error`][crate::DayOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one trip row.
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()>;

    /// Write one end-of-day row.
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Push buffered rows to the underlying files.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and stop writing.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
