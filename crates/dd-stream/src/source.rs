//! The `OrderSource` trait — what the dispatcher needs from a streamer.

use dd_core::{Order, SimTime};

use crate::StreamResult;

/// A clock-driven source of orders.
///
/// Every driving method returns the orders it revealed, in reveal order;
/// ownership of those orders passes to the caller.  Implementations must
/// never reveal an order whose creation time is after [`current_time`], and
/// must never reveal the same order twice.
///
/// [`OrderStreamer`][crate::OrderStreamer] is the production implementation;
/// tests substitute scripted fakes.
///
/// [`current_time`]: OrderSource::current_time
pub trait OrderSource {
    /// Begin streaming.  Idempotent: only the first call reveals anything.
    fn start(&mut self) -> Vec<Order>;

    /// Jump the clock forward to the next unrevealed order's creation time
    /// and reveal what is due.  A no-op before `start` or once exhausted.
    fn advance_time(&mut self) -> Vec<Order>;

    /// Move the clock forward by `minutes` and reveal what is due.
    ///
    /// Fails without touching the clock if `minutes` is negative or not
    /// finite.
    fn add_minutes(&mut self, minutes: f64) -> StreamResult<Vec<Order>>;

    /// Started, with at least one order still unrevealed.
    fn is_active(&self) -> bool;

    fn current_time(&self) -> SimTime;
}
