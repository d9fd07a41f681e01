//! Plain data row types written by results writers.

use dd_core::{DeliveredOrder, OrderId, SimTime};

/// One line of the results file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRow {
    pub order_id:  OrderId,
    /// When the drone left the warehouse with this order.
    pub departure: SimTime,
}

impl From<&DeliveredOrder> for DeliveryRow {
    fn from(record: &DeliveredOrder) -> Self {
        Self {
            order_id:  record.id.clone(),
            departure: record.departure_time,
        }
    }
}
