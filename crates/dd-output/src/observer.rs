//! `ResultsObserver<W>` — bridges `DispatchObserver` to a `ResultsWriter`.

use dd_core::SimTime;
use dd_sim::{DispatchObserver, RunSummary, StepOutcome};

use crate::row::DeliveryRow;
use crate::writer::ResultsWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every delivery and the closing net
/// score to any [`ResultsWriter`].
///
/// Errors from the writer are stored internally because `DispatchObserver`
/// methods have no return value.  After `dispatcher.run()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct ResultsObserver<W: ResultsWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ResultsWriter> ResultsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `dispatcher.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
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

impl<W: ResultsWriter> DispatchObserver for ResultsObserver<W> {
    fn on_step(&mut self, _now: SimTime, outcome: &StepOutcome) {
        if let StepOutcome::Delivered(record) = outcome {
            let result = self.writer.write_delivery(&DeliveryRow::from(record));
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_net_score(summary.net_score);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
