//! `dd-core` — foundational types for the `rust_dd` drone delivery simulation.
//!
//! This crate is a dependency of every other `dd-*` crate.  It intentionally
//! has no `dd-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `OrderId`                                             |
//! | [`geo`]         | `Coordinate`, destination-code decoding, Manhattan distance |
//! | [`time`]        | `SimTime` (milliseconds since midnight)               |
//! | [`order`]       | `Order`, `DeliveredOrder`, `Rating`                   |
//! | [`config`]      | `DepotConfig`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; `SimTime` as `"HH:MM:SS"` |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod order;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DepotConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::OrderId;
pub use order::{DeliveredOrder, Order, Rating};
pub use time::SimTime;
