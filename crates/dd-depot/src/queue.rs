//! `DispatchQueue` — a stable min-priority queue of pending orders.
//!
//! # Why a `BTreeMap`
//!
//! The ordering must be total and stable: two orders with the same `due`
//! time leave in the order they arrived.  Keying a `BTreeMap` by
//! `(due, seq)` makes the tie-break part of the key itself, so there is no
//! reliance on a collection that happens to remember insertion order.
//!
//! O(log N) insert and O(log N) pop, where N is the number of pending
//! orders.  A working day has at most a few hundred.

use std::collections::BTreeMap;

use dd_core::{Order, SimTime};

/// Position of one order in the queue.  Field order defines `Ord`:
/// earlier `due` first, then lower `seq`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DispatchKey {
    pub due: SimTime,
    pub seq: u64,
}

/// Pending orders ranked by [`DispatchKey`].
#[derive(Default, Debug)]
pub struct DispatchQueue {
    inner:    BTreeMap<DispatchKey, Order>,
    next_seq: u64,
}

impl DispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `order` with priority `due`.  Returns the key it was stored
    /// under; keys are never reused.
    pub fn push(&mut self, due: SimTime, order: Order) -> DispatchKey {
        let key = DispatchKey { due, seq: self.next_seq };
        self.next_seq += 1;
        self.inner.insert(key, order);
        key
    }

    /// The highest-priority order, without removing it.
    pub fn peek(&self) -> Option<(&DispatchKey, &Order)> {
        self.inner.first_key_value()
    }

    /// Remove and return the highest-priority order.
    pub fn pop(&mut self) -> Option<(DispatchKey, Order)> {
        self.inner.pop_first()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pending orders in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (&DispatchKey, &Order)> {
        self.inner.iter()
    }
}
