//! The `Dispatcher` struct, its step function, and the run loop.

use dd_core::{DeliveredOrder, Order, OrderId, SimTime};
use dd_depot::DispatchStore;
use dd_stream::OrderSource;
use tracing::{debug, info, warn};

use crate::{DispatchObserver, SatisfactionTally, SimResult};

/// Callback fired synchronously for every completed delivery.
pub type DeliveredListener = Box<dyn FnMut(&DeliveredOrder)>;

// ── Step outcome ──────────────────────────────────────────────────────────────

/// What one call to [`Dispatcher::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Nothing was pending and advancing the clock revealed nothing.
    Idle,
    /// The head order could not be delivered before closing and was
    /// discarded.  The full order is kept in [`Dispatcher::dropped`].
    Dropped(OrderId),
    /// An order was feasible but the drone was out.
    DroneBusy,
    /// An order was flown out.
    Delivered(DeliveredOrder),
}

// ── Run summary ───────────────────────────────────────────────────────────────

/// Totals at the end of (or part way through) a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub completed:  usize,
    pub dropped:    usize,
    pub tally:      SatisfactionTally,
    pub net_score:  f64,
    pub final_time: SimTime,
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Drives one working day: pulls revealed orders from an [`OrderSource`]
/// into a [`DispatchStore`] and flies them out one step at a time.
///
/// The dispatcher owns both collaborators.  Everything it tracks itself is
/// the record of what happened: completed deliveries, dropped orders, and
/// the satisfaction tally.
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder] for the
/// production streamer and warehouse, or [`Dispatcher::new`] with any
/// implementations of the two traits.
pub struct Dispatcher<S: OrderSource, W: DispatchStore> {
    source:    S,
    store:     W,
    completed: Vec<DeliveredOrder>,
    dropped:   Vec<Order>,
    tally:     SatisfactionTally,
    listeners: Vec<DeliveredListener>,
}

impl<S: OrderSource, W: DispatchStore> Dispatcher<S, W> {
    pub fn new(source: S, store: W) -> Self {
        Self {
            source,
            store,
            completed: Vec::new(),
            dropped:   Vec::new(),
            tally:     SatisfactionTally::default(),
            listeners: Vec::new(),
        }
    }

    /// Register a callback for completed deliveries.  Listeners fire in
    /// registration order, once per delivery, after the clock has moved past
    /// the round trip and before the drone docks.
    pub fn subscribe_delivered<F>(&mut self, listener: F)
    where
        F: FnMut(&DeliveredOrder) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Start the order source and queue everything already due.
    /// Idempotent.
    pub fn start(&mut self) {
        let batch = self.source.start();
        self.admit(batch);
    }

    /// Perform one dispatch decision.  See the crate docs for the sequence.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        if !self.store.has_pending() {
            let batch = self.source.advance_time();
            self.admit(batch);
            if !self.store.has_pending() {
                debug!(now = %self.source.current_time(), "nothing to dispatch");
                return Ok(StepOutcome::Idle);
            }
        }

        let now = self.source.current_time();

        if !self.store.has_time_to_deliver_next(now)? {
            let order = self.store.drop_next()?;
            warn!(
                order = %order.id(),
                created = %order.created(),
                %now,
                "round trip would end after closing; order dropped"
            );
            let id = order.id().clone();
            self.dropped.push(order);
            return Ok(StepOutcome::Dropped(id));
        }

        let Some(order) = self.store.try_dispatch_next()? else {
            debug!(%now, "drone is out");
            return Ok(StepOutcome::DroneBusy);
        };

        let outbound = self.store.outbound_minutes(&order);
        let round_trip = self.store.round_trip_minutes(&order);
        let record = DeliveredOrder {
            id:             order.id().clone(),
            order_placed:   order.created(),
            departure_time: now,
            delivered_time: now.saturating_add_minutes(outbound),
        };
        let revealed = self.source.add_minutes(round_trip)?;

        let rating = record.rating();
        self.tally.record(rating);
        debug!(
            order = %record.id,
            departs = %record.departure_time,
            delivered = %record.delivered_time,
            %rating,
            "order delivered"
        );

        self.completed.push(record.clone());
        for listener in &mut self.listeners {
            listener(&record);
        }

        self.store.dock_drone();
        self.admit(revealed);

        Ok(StepOutcome::Delivered(record))
    }

    /// Step until the source is exhausted and nothing is pending, or until
    /// `observer.should_stop()` returns `true`.
    ///
    /// Starts the source first if needed.
    pub fn run<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        self.start();
        let opened = self.source.current_time();
        info!(%opened, pending = self.store.pending_len(), "dispatch run started");
        observer.on_run_start(opened, self.store.pending_len());

        while !self.is_finished() {
            if observer.should_stop() {
                info!(now = %self.source.current_time(), "dispatch run stopped early");
                break;
            }
            self.observed_step(observer)?;
        }

        let summary = self.summary();
        info!(
            completed = summary.completed,
            dropped = summary.dropped,
            net_score = summary.net_score,
            finished = %summary.final_time,
            "dispatch run finished"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` steps (ignores the finish condition).
    ///
    /// Useful for tests and incremental stepping.  Does not start the
    /// source; call [`start`][Self::start] first.
    pub fn run_steps<O: DispatchObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// `true` once no order remains to be revealed or dispatched.
    pub fn is_finished(&self) -> bool {
        !self.source.is_active() && !self.store.has_pending()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn current_time(&self) -> SimTime {
        self.source.current_time()
    }

    /// Deliveries in dispatch order.
    pub fn completed(&self) -> &[DeliveredOrder] {
        &self.completed
    }

    /// Orders discarded because they could not be delivered before closing.
    pub fn dropped(&self) -> &[Order] {
        &self.dropped
    }

    pub fn tally(&self) -> &SatisfactionTally {
        &self.tally
    }

    pub fn net_score(&self) -> f64 {
        self.tally.net_score()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            completed:  self.completed.len(),
            dropped:    self.dropped.len(),
            tally:      self.tally,
            net_score:  self.tally.net_score(),
            final_time: self.source.current_time(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &W {
        &self.store
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.source.current_time();
        let outcome = self.step()?;
        observer.on_step(now, &outcome);
        Ok(())
    }

    fn admit(&mut self, batch: Vec<Order>) {
        for order in batch {
            self.store.enqueue(order);
        }
    }
}
