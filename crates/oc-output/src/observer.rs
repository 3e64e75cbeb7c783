//! `DayOutputObserver<W>` — bridges `DayObserver` to an `OutputWriter`.

use oc_day::{DayObserver, DaySummary, TripRecord};

use crate::row::{DaySummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DayObserver`] that writes every recorded trip and every completed day
/// to an [`OutputWriter`].
///
/// Observer callbacks have no return value, so write errors are stored and
/// retrieved afterwards with [`take_error`][Self::take_error].
pub struct DayOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> DayOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and close the writer.  Errors are stored like write errors.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DayObserver for DayOutputObserver<W> {
    fn on_trip_recorded(&mut self, trip: &TripRecord) {
        let result = self.writer.write_trip(&TripRow::from(trip));
        self.store_err(result);
    }

    fn on_day_complete(&mut self, summary: &DaySummary) {
        let result = self
            .writer
            .write_day_summary(&DaySummaryRow::from(summary))
            .and_then(|()| self.writer.flush());
        self.store_err(result);
    }
}
