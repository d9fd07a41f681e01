//! `dd-stream` — the logical-time order streamer and order-file loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`source`]    | `OrderSource` — the capability the dispatcher drives      |
//! | [`streamer`]  | `OrderStreamer` — reveals a pre-loaded order list on time |
//! | [`loader`]    | `load_orders_path`, `load_orders_reader`                  |
//! | [`error`]     | `StreamError`, `StreamResult<T>`                          |
//!
//! # Reveal model (summary)
//!
//! The streamer owns every future order, sorted by creation time, and a
//! logical clock.  The clock only moves when the driver calls one of:
//!
//! ```text
//! start()           reveal everything already due at the opening time
//! advance_time()    jump the clock to the next order's creation time
//! add_minutes(m)    move the clock forward by m minutes
//! ```
//!
//! Each of those runs one *reveal pass*: every order with
//! `created <= clock` is handed to the subscribers and returned to the
//! caller, in input order.  Nothing is ever revealed early or twice.

pub mod error;
pub mod loader;
pub mod source;
pub mod streamer;


pub use error::{StreamError, StreamResult};
pub use loader::{load_orders_path, load_orders_reader};
pub use source::OrderSource;
pub use streamer::{OrderListener, OrderStreamer};
