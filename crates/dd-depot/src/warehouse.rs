//! `Warehouse` — a single-drone depot with a fixed closing time.

use dd_core::{Coordinate, DepotConfig, Order, SimTime};
use tracing::debug;

use crate::{DepotError, DepotResult, DispatchQueue, DispatchStore};

/// The production [`DispatchStore`].
///
/// Travel estimates are Manhattan distance × `minutes_per_step` outbound,
/// and that × `return_ratio` for the flight home.  The drone is either in
/// the warehouse or out; there is no in-flight state.
#[derive(Debug)]
pub struct Warehouse {
    position:         Coordinate,
    closes_at:        SimTime,
    minutes_per_step: f64,
    return_ratio:     f64,
    queue:            DispatchQueue,
    drone_available:  bool,
}

impl Warehouse {
    /// Build an empty warehouse with its drone docked.
    pub fn new(config: &DepotConfig) -> DepotResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// A default-configured warehouse at the origin that closes at
    /// `closes_at`.
    pub fn closing_at(closes_at: SimTime) -> Self {
        Self {
            closes_at,
            ..Self::from_config(&DepotConfig::default())
        }
    }

    fn from_config(config: &DepotConfig) -> Self {
        Self {
            position:         config.position,
            closes_at:        config.closes_at,
            minutes_per_step: config.minutes_per_step,
            return_ratio:     config.return_ratio,
            queue:            DispatchQueue::new(),
            drone_available:  true,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Latest time the drone may be back at the warehouse.
    pub fn closes_at(&self) -> SimTime {
        self.closes_at
    }

    pub fn drone_available(&self) -> bool {
        self.drone_available
    }

    /// The order that would be dispatched next.
    pub fn peek_next(&self) -> Option<&Order> {
        self.queue.peek().map(|(_, order)| order)
    }

    /// Read-only view of the queue, in dispatch order.
    pub fn queue(&self) -> &DispatchQueue {
        &self.queue
    }

    fn distance(&self, order: &Order) -> u64 {
        self.position.manhattan(order.destination())
    }

    fn head(&self, operation: &'static str) -> DepotResult<&Order> {
        self.peek_next().ok_or(DepotError::Empty { operation })
    }
}

impl DispatchStore for Warehouse {
    fn enqueue(&mut self, order: Order) {
        let due = order.created().saturating_add_minutes(self.outbound_minutes(&order));
        let id = order.id().clone();
        let key = self.queue.push(due, order);
        debug!(order = %id, due = %key.due, seq = key.seq, "order queued");
    }

    fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    fn pending_len(&self) -> usize {
        self.queue.len()
    }

    fn has_time_to_deliver_next(&self, now: SimTime) -> DepotResult<bool> {
        let next = self.head("has_time_to_deliver_next")?;
        let back_at = now.saturating_add_minutes(self.round_trip_minutes(next));
        Ok(back_at <= self.closes_at)
    }

    fn drop_next(&mut self) -> DepotResult<Order> {
        let (_, order) = self.queue.pop().ok_or(DepotError::Empty { operation: "drop_next" })?;
        Ok(order)
    }

    fn try_dispatch_next(&mut self) -> DepotResult<Option<Order>> {
        if !self.drone_available {
            debug!(pending = self.queue.len(), "drone is out; nothing dispatched");
            return Ok(None);
        }
        let (_, order) = self
            .queue
            .pop()
            .ok_or(DepotError::Empty { operation: "try_dispatch_next" })?;
        self.drone_available = false;
        debug!(order = %order.id(), "drone dispatched");
        Ok(Some(order))
    }

    fn dock_drone(&mut self) {
        if !self.drone_available {
            debug!("drone docked");
        }
        self.drone_available = true;
    }

    fn outbound_minutes(&self, order: &Order) -> f64 {
        self.distance(order) as f64 * self.minutes_per_step
    }

    fn return_minutes(&self, order: &Order) -> f64 {
        self.distance(order) as f64 * self.minutes_per_step * self.return_ratio
    }
}
