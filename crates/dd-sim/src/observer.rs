//! Dispatcher observer trait for progress reporting and result collection.

use dd_core::SimTime;

use crate::{RunSummary, StepOutcome};

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] and
/// [`Dispatcher::run_steps`][crate::Dispatcher::run_steps].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — drop reporter
///
/// ```rust,ignore
/// struct DropReporter;
///
/// impl DispatchObserver for DropReporter {
///     fn on_step(&mut self, now: SimTime, outcome: &StepOutcome) {
///         if let StepOutcome::Dropped(id) = outcome {
///             eprintln!("{now}: gave up on {id}");
///         }
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once when a run begins, after the opening batch is queued.
    fn on_run_start(&mut self, _now: SimTime, _pending: usize) {}

    /// Called after every step.  `now` is the clock when the step began,
    /// which for a delivery is its departure time.
    fn on_step(&mut self, _now: SimTime, _outcome: &StepOutcome) {}

    /// Called once after the final step of [`Dispatcher::run`][crate::Dispatcher::run].
    fn on_run_end(&mut self, _summary: &RunSummary) {}

    /// Polled before each step of `run`.  Returning `true` ends the run
    /// early; the summary still reports what happened so far.
    fn should_stop(&self) -> bool {
        false
    }
}

/// A [`DispatchObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
