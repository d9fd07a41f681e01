//! `OrderStreamer` — reveals a pre-loaded, time-sorted order list as the
//! logical clock advances.

use std::collections::VecDeque;

use dd_core::{Order, SimTime};
use tracing::debug;

use crate::{OrderSource, StreamError, StreamResult};

/// Callback invoked once per revealed order.
pub type OrderListener = Box<dyn FnMut(&Order)>;

/// A mocked-time order stream.
///
/// # Precondition
///
/// `orders` must be sorted by creation time, ascending.  The streamer does
/// not re-sort: a reveal pass stops at the first order that is not yet due,
/// so an out-of-place early order sitting behind a later one is held back
/// until the clock passes the later one.
pub struct OrderStreamer {
    /// Orders not yet revealed.  The front is the cursor.
    backlog:   VecDeque<Order>,
    clock:     SimTime,
    started:   bool,
    revealed:  usize,
    listeners: Vec<OrderListener>,
}

impl OrderStreamer {
    /// Create a stopped streamer whose clock reads `start_time`.
    pub fn new(orders: Vec<Order>, start_time: SimTime) -> Self {
        Self {
            backlog:   orders.into(),
            clock:     start_time,
            started:   false,
            revealed:  0,
            listeners: Vec::new(),
        }
    }

    /// Register a callback for revealed orders.
    ///
    /// Listeners fire in registration order; each sees the whole batch, in
    /// reveal order, before the next listener runs.  All of them run before
    /// the revealed batch is returned to the driver.  Registering has no effect
    /// until the next reveal pass.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Order) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Orders revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Orders not yet revealed.
    pub fn remaining(&self) -> usize {
        self.backlog.len()
    }

    /// Creation time of the next unrevealed order.
    pub fn next_due(&self) -> Option<SimTime> {
        self.backlog.front().map(Order::created)
    }

    // ── Reveal pass ───────────────────────────────────────────────────────

    /// Hand every due order to the listeners and return them.
    ///
    /// Does nothing until the streamer has been started.
    fn reveal(&mut self) -> Vec<Order> {
        if !self.started {
            return Vec::new();
        }

        let now = self.clock;
        let due = self
            .backlog
            .iter()
            .take_while(|order| order.created() <= now)
            .count();
        if due == 0 {
            return Vec::new();
        }

        let batch: Vec<Order> = self.backlog.drain(..due).collect();
        for order in &batch {
            debug!(order = %order.id(), created = %order.created(), now = %now, "order revealed");
        }
        for listener in &mut self.listeners {
            for order in &batch {
                listener(order);
            }
        }
        self.revealed += batch.len();
        batch
    }
}

impl OrderSource for OrderStreamer {
    fn start(&mut self) -> Vec<Order> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        debug!(now = %self.clock, pending = self.backlog.len(), "order stream started");
        self.reveal()
    }

    fn advance_time(&mut self) -> Vec<Order> {
        if !self.is_active() {
            return Vec::new();
        }
        // Never backwards: the next order may already be due.
        match self.next_due() {
            Some(next) if next > self.clock => self.clock = next,
            _ => {}
        }
        self.reveal()
    }

    fn add_minutes(&mut self, minutes: f64) -> StreamResult<Vec<Order>> {
        if !minutes.is_finite() {
            return Err(StreamError::NonFiniteDelta);
        }
        if minutes < 0.0 {
            return Err(StreamError::TimeReversal { minutes });
        }
        self.clock = self
            .clock
            .checked_add_minutes(minutes)
            .ok_or(StreamError::ClockOverflow { minutes })?;
        Ok(self.reveal())
    }

    fn is_active(&self) -> bool {
        self.started && !self.backlog.is_empty()
    }

    fn current_time(&self) -> SimTime {
        self.clock
    }
}
