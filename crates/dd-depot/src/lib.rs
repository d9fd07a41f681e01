//! `dd-depot` — the warehouse: pending orders, the drone, and travel estimates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`queue`]     | `DispatchQueue` (`BTreeMap<DispatchKey, Order>`), `DispatchKey`   |
//! | [`store`]     | `DispatchStore` — the capability the dispatcher drives            |
//! | [`warehouse`] | `Warehouse` — production `DispatchStore` with one drone           |
//! | [`error`]     | `DepotError`, `DepotResult<T>`                                    |
//!
//! # Priority model
//!
//! Each pending order is keyed by its *estimated delivery time if it left
//! the moment it was placed*:
//!
//! ```text
//! due  = order.created + outbound_minutes(order)
//! key  = (due, enqueue sequence number)
//! ```
//!
//! The lowest key is dispatched first.  Short trips and old orders both rank
//! early; equal `due` values go first-enqueued-first-served.

pub mod error;
pub mod queue;
pub mod store;
pub mod warehouse;


pub use error::{DepotError, DepotResult};
pub use queue::{DispatchKey, DispatchQueue};
pub use store::DispatchStore;
pub use warehouse::Warehouse;
