//! The `ResultsWriter` trait implemented by all results writers.

use crate::{DeliveryRow, OutputResult};

/// Trait implemented by results backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`ResultsObserver::take_error`][crate::ResultsObserver::take_error].
pub trait ResultsWriter {
    /// Write one delivery line.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write the closing net score line.
    fn write_net_score(&mut self, score: f64) -> OutputResult<()>;

    /// Flush the underlying handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
