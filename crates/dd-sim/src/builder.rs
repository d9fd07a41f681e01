//! Fluent builder for constructing a production [`Dispatcher`].

use dd_core::{DepotConfig, Order};
use dd_depot::Warehouse;
use dd_stream::OrderStreamer;
use tracing::warn;

use crate::{Dispatcher, SimResult};

/// Fluent builder for `Dispatcher<OrderStreamer, Warehouse>`.
///
/// # Inputs
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `new(config)`   | required                |
/// | `.orders(v)`    | no orders               |
///
/// The streamer's clock starts at `config.opens_at`; the warehouse closes
/// at `config.closes_at`.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = DispatcherBuilder::new(DepotConfig::default())
///     .orders(orders)
///     .build()?;
/// dispatcher.run(&mut NoopObserver)?;
/// ```
pub struct DispatcherBuilder {
    config: DepotConfig,
    orders: Vec<Order>,
}

impl DispatcherBuilder {
    pub fn new(config: DepotConfig) -> Self {
        Self { config, orders: Vec::new() }
    }

    /// Supply the day's orders, sorted by creation time.
    pub fn orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// Validate the configuration and assemble the dispatcher.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`](crate::SimError::Config) if the configuration
    ///   is unusable.
    pub fn build(self) -> SimResult<Dispatcher<OrderStreamer, Warehouse>> {
        self.config.validate()?;

        let after_close = self
            .orders
            .iter()
            .filter(|o| o.created() > self.config.closes_at)
            .count();
        if after_close > 0 {
            warn!(
                count = after_close,
                closes_at = %self.config.closes_at,
                "orders placed after closing will be dropped"
            );
        }

        let store = Warehouse::new(&self.config)?;
        let source = OrderStreamer::new(self.orders, self.config.opens_at);
        Ok(Dispatcher::new(source, store))
    }
}
