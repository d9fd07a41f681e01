//! Orders, completed deliveries, and customer satisfaction ratings.

use std::fmt;

use crate::time::MS_PER_HOUR;
use crate::{Coordinate, CoreResult, OrderId, SimTime};

// ── Order ─────────────────────────────────────────────────────────────────────

/// A customer order waiting to be revealed, queued, or delivered.
///
/// Immutable once built.  `Order` deliberately has no ordering of its own:
/// how orders rank against each other depends on the warehouse they are
/// queued in, so that comparison lives in `dd-depot`'s dispatch queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "OrderFields"))]
pub struct Order {
    id:                  OrderId,
    created:             SimTime,
    destination:         Coordinate,
    destination_encoded: String,
}

impl Order {
    /// Build an order, decoding `destination_encoded` into a [`Coordinate`].
    pub fn new(
        id:                  impl Into<OrderId>,
        created:             SimTime,
        destination_encoded: impl Into<String>,
    ) -> CoreResult<Self> {
        let destination_encoded = destination_encoded.into();
        let destination = Coordinate::decode(&destination_encoded)?;
        Ok(Self {
            id: id.into(),
            created,
            destination,
            destination_encoded,
        })
    }

    #[inline]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// The moment the customer placed the order.
    #[inline]
    pub fn created(&self) -> SimTime {
        self.created
    }

    #[inline]
    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// The destination exactly as it appeared in the input (`"S1E2"`).
    #[inline]
    pub fn destination_encoded(&self) -> &str {
        &self.destination_encoded
    }
}

/// Wire form of an [`Order`]; the decoded destination is always rebuilt
/// from `destination_encoded`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OrderFields {
    id:                  OrderId,
    created:             SimTime,
    destination_encoded: String,
}

#[cfg(feature = "serde")]
impl TryFrom<OrderFields> for Order {
    type Error = crate::CoreError;

    fn try_from(fields: OrderFields) -> CoreResult<Self> {
        Order::new(fields.id, fields.created, fields.destination_encoded)
    }
}

impl fmt::Display for Order {
    /// The order-file line form: `<id> <DESTINATION> <HH:MM:SS>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.id,
            self.destination_encoded.to_ascii_uppercase(),
            self.created
        )
    }
}

// ── Rating ────────────────────────────────────────────────────────────────────

/// Hours from order to delivery at or beyond which a customer is a detractor.
pub const DETRACTOR_HOURS: f64 = 4.0;

/// Hours from order to delivery at or beyond which a customer is neutral.
pub const NEUTRAL_HOURS: f64 = 2.0;

/// Net-promoter style classification of one delivery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    Promoter,
    Neutral,
    Detractor,
}

impl Rating {
    /// Classify a wait of `elapsed_ms`.
    ///
    /// The wait is rounded to two decimal places of an hour (half-to-even)
    /// before it is compared, so 1 h 59 min 59.9 s counts as 2 h.
    pub fn classify(elapsed_ms: u64) -> Rating {
        let hours = elapsed_ms as f64 / MS_PER_HOUR as f64;
        let hours = (hours * 100.0).round_ties_even() / 100.0;
        if hours >= DETRACTOR_HOURS {
            Rating::Detractor
        } else if hours >= NEUTRAL_HOURS {
            Rating::Neutral
        } else {
            Rating::Promoter
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rating::Promoter  => "promoter",
            Rating::Neutral   => "neutral",
            Rating::Detractor => "detractor",
        })
    }
}

// ── DeliveredOrder ────────────────────────────────────────────────────────────

/// The record of one successful dispatch.
///
/// `delivered_time` is the estimated arrival at the customer, not the drone's
/// return to the warehouse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveredOrder {
    pub id:             OrderId,
    pub order_placed:   SimTime,
    pub departure_time: SimTime,
    pub delivered_time: SimTime,
}

impl DeliveredOrder {
    /// Milliseconds the customer waited, from placing the order to delivery.
    #[inline]
    pub fn wait_ms(&self) -> u64 {
        self.delivered_time.since(self.order_placed)
    }

    pub fn rating(&self) -> Rating {
        Rating::classify(self.wait_ms())
    }
}
