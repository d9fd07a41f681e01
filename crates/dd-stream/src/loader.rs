//! Order-file loader.
//!
//! # File format
//!
//! One order per line, three space-separated fields, no header row:
//!
//! ```text
//! MW001 N11W5 05:11:50
//! MW002 S3E2 05:11:55
//! MW003 N7E50 05:31:50
//! ```
//!
//! | Field         | Meaning                                              |
//! |---------------|------------------------------------------------------|
//! | `id`          | Order identifier, echoed verbatim into results       |
//! | `destination` | Compass code, see [`dd_core::Coordinate::decode`]    |
//! | `created`     | Time of day the order was placed, `HH:MM:SS`         |
//!
//! Spaces around a line are ignored; fields are separated by exactly one
//! space.
//!
//! Lines must be sorted by `created`.  The loader does not sort them (the
//! streamer's reveal order is the file order); it logs a warning when they
//! are out of order.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use dd_core::{Order, SimTime};

use crate::{StreamError, StreamResult};

const FIELD_COUNT: usize = 3;

// ── Record ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderRecord {
    id:          String,
    destination: String,
    created:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every order from the file at `path`.
pub fn load_orders_path(path: &Path) -> StreamResult<Vec<Order>> {
    let file = std::fs::File::open(path).map_err(StreamError::Io)?;
    let orders = load_orders_reader(file)?;
    debug!(path = %path.display(), count = orders.len(), "loaded order file");
    Ok(orders)
}

/// Like [`load_orders_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn load_orders_reader<R: Read>(reader: R) -> StreamResult<Vec<Order>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut orders = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        orders.push(parse_record(&strip_edge_blanks(&record), line)?);
    }

    if let Some(pair) = orders.windows(2).find(|w| w[1].created() < w[0].created()) {
        warn!(
            earlier = %pair[0].id(),
            later = %pair[1].id(),
            "order file is not sorted by creation time; orders may be revealed late"
        );
    }

    Ok(orders)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Drop the empty fields that leading or trailing spaces produce.
///
/// Inner runs of spaces still yield empty fields and fail the field count.
fn strip_edge_blanks(record: &StringRecord) -> StringRecord {
    let fields: Vec<&str> = record.iter().collect();
    let start = fields.iter().position(|f| !f.is_empty()).unwrap_or(fields.len());
    let end = fields.iter().rposition(|f| !f.is_empty()).map_or(start, |i| i + 1);
    fields[start..end].iter().copied().collect()
}

fn parse_record(record: &StringRecord, line: u64) -> StreamResult<Order> {
    let parse_err = |reason: String| StreamError::Parse { line, reason };

    if record.len() != FIELD_COUNT {
        return Err(parse_err(format!(
            "expected {FIELD_COUNT} fields (<id> <destination> <HH:MM:SS>), found {}",
            record.len()
        )));
    }

    let row: OrderRecord = record
        .deserialize(None)
        .map_err(|e| parse_err(e.to_string()))?;

    if row.id.is_empty() {
        return Err(parse_err("empty order id".into()));
    }
    let created = row
        .created
        .parse::<SimTime>()
        .map_err(|e| parse_err(e.to_string()))?;
    Order::new(row.id, created, row.destination).map_err(|e| parse_err(e.to_string()))
}
