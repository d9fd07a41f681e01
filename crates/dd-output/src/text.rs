//! Plain-text results backend.
//!
//! Space-separated, no header row, no quoting:
//!
//! ```text
//! <order id> <departure HH:MM:SS>
//! ...
//! NPS: <score>
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use tracing::debug;

use crate::writer::ResultsWriter;
use crate::{DeliveryRow, OutputError, OutputResult};

const NPS_LABEL: &str = "NPS:";

/// Writes delivery results as space-separated text lines.
pub struct TextResultsWriter<W: Write> {
    lines:    Writer<W>,
    written:  usize,
    finished: bool,
}

impl TextResultsWriter<File> {
    /// Create (or truncate) the results file at `path`.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "results file opened");
        Ok(Self::new(file))
    }
}

impl<W: Write> TextResultsWriter<W> {
    /// Write results to any `Write` sink.
    pub fn new(inner: W) -> Self {
        let lines = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(inner);
        Self {
            lines,
            written:  0,
            finished: false,
        }
    }

    /// Number of delivery lines written so far.
    pub fn deliveries_written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.lines
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ResultsWriter for TextResultsWriter<W> {
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.lines
            .write_record([row.order_id.as_str(), row.departure.to_string().as_str()])?;
        self.written += 1;
        Ok(())
    }

    fn write_net_score(&mut self, score: f64) -> OutputResult<()> {
        self.lines.write_record([NPS_LABEL, score.to_string().as_str()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.lines.flush()?;
        debug!(deliveries = self.written, "results flushed");
        Ok(())
    }
}
