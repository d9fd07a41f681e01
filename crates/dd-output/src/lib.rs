//! `dd-output` — delivery results writers.
//!
//! The results file has one line per delivery, in dispatch order, followed
//! by the day's net score:
//!
//! ```text
//! MW002 06:00:00
//! MW001 06:07:30
//! NPS: 75
//! ```
//!
//! Writers implement [`ResultsWriter`] and are driven by
//! [`ResultsObserver`], which implements `dd_sim::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dd_output::{ResultsObserver, TextResultsWriter};
//!
//! let writer = TextResultsWriter::from_path(Path::new("DroneResults.txt"))?;
//! let mut obs = ResultsObserver::new(writer);
//! dispatcher.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use observer::ResultsObserver;
pub use row::DeliveryRow;
pub use text::TextResultsWriter;
pub use writer::ResultsWriter;
