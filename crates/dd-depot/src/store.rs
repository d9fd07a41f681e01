//! The `DispatchStore` trait — what the dispatcher needs from a warehouse.

use dd_core::{Order, SimTime};

use crate::DepotResult;

/// Pending orders plus a drone to carry them.
///
/// The head-of-queue operations (`has_time_to_deliver_next`, `drop_next`,
/// `try_dispatch_next`) require at least one pending order and return
/// [`DepotError::Empty`][crate::DepotError::Empty] otherwise; they never
/// invent an order.
///
/// [`Warehouse`][crate::Warehouse] is the production implementation; tests
/// substitute scripted fakes.
pub trait DispatchStore {
    /// Add an order to the pending set.
    fn enqueue(&mut self, order: Order);

    fn has_pending(&self) -> bool;

    fn pending_len(&self) -> usize;

    /// Can the drone leave at `now` with the head order and be back before
    /// closing?  Pure query.
    fn has_time_to_deliver_next(&self, now: SimTime) -> DepotResult<bool>;

    /// Remove the head order without dispatching it.
    fn drop_next(&mut self) -> DepotResult<Order>;

    /// If the drone is free, take it and the head order.
    ///
    /// `Ok(None)` means the drone is out: a normal outcome, and the pending
    /// set is left untouched.
    fn try_dispatch_next(&mut self) -> DepotResult<Option<Order>>;

    /// Return the drone to the warehouse.  Idempotent.
    fn dock_drone(&mut self);

    /// Estimated flight time from the warehouse to `order`'s destination.
    fn outbound_minutes(&self, order: &Order) -> f64;

    /// Estimated flight time from `order`'s destination back home.
    fn return_minutes(&self, order: &Order) -> f64;

    fn round_trip_minutes(&self, order: &Order) -> f64 {
        self.outbound_minutes(order) + self.return_minutes(order)
    }
}
