use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("order file line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("a clock delta of {minutes} minutes would move time backwards")]
    TimeReversal { minutes: f64 },

    #[error("clock delta must be a finite number of minutes")]
    NonFiniteDelta,

    #[error("adding {minutes} minutes overflows the clock")]
    ClockOverflow { minutes: f64 },

    #[error("order file read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StreamResult<T> = Result<T, StreamError>;
