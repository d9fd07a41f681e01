//! `dd-sim` — the delivery step function and its run loop.
//!
//! # One step
//!
//! ```text
//! if the warehouse is empty:
//!     advance the clock to the next order and queue what it reveals
//!     still empty                       → Idle
//! head order cannot make it home by closing → drop it        → Dropped
//! drone is out                          → DroneBusy
//! otherwise:
//!     dispatch, advance the clock by the round trip,
//!     record, rate, notify, dock the drone, queue what it reveals
//!                                       → Delivered
//! ```
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`dispatcher`]   | `Dispatcher<S, W>`, `StepOutcome`, `RunSummary`       |
//! | [`builder`]      | `DispatcherBuilder` — config + orders → `Dispatcher`  |
//! | [`satisfaction`] | `SatisfactionTally`, net score                        |
//! | [`observer`]     | `DispatchObserver`, `NoopObserver`                    |
//! | [`error`]        | `SimError`, `SimResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dd_core::DepotConfig;
//! use dd_sim::{DispatcherBuilder, NoopObserver};
//!
//! let orders = dd_stream::load_orders_path(path)?;
//! let mut dispatcher = DispatcherBuilder::new(DepotConfig::default())
//!     .orders(orders)
//!     .build()?;
//! let summary = dispatcher.run(&mut NoopObserver)?;
//! println!("NPS: {}", summary.net_score);
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod satisfaction;


pub use builder::DispatcherBuilder;
pub use dispatcher::{DeliveredListener, Dispatcher, RunSummary, StepOutcome};
pub use error::{SimError, SimResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use satisfaction::SatisfactionTally;
