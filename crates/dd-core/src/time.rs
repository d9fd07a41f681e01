//! Logical simulation time.
//!
//! # Design
//!
//! Time is represented as a `SimTime`: whole milliseconds since midnight of
//! the simulated day.  Nothing in the simulation reads the wall clock; time
//! only moves when the order streamer is told to move it.
//!
//! Using an integer as the canonical time unit means comparisons are exact,
//! which the dispatch queue's tie-break depends on.  Travel estimates are
//! fractional minutes (a 3-step trip returns in 1.5 min); they are converted
//! once, where they are added, by rounding to the nearest millisecond.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR:   u64 = 60 * MS_PER_MINUTE;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// A point on the simulation's logical clock.
///
/// Ordering is total and exact.  `Display` and `FromStr` use the `HH:MM:SS`
/// format of order files and results files; sub-second precision is kept
/// internally but truncated on display.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);
    pub const MAX: SimTime = SimTime(u64::MAX);

    /// Build a time from clock components.  Not range-checked; use
    /// [`str::parse`] for untrusted input.
    #[inline]
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> SimTime {
        SimTime(hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND)
    }

    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Break into `(hours, minutes, seconds)`; hours are not wrapped at 24.
    pub fn hms(self) -> (u64, u64, u64) {
        let secs = self.0 / MS_PER_SECOND;
        (secs / 3_600, (secs % 3_600) / 60, secs % 60)
    }

    /// Add a fractional number of minutes.
    ///
    /// Returns `None` if `minutes` is negative or not finite, or if the
    /// result does not fit.  Callers that must keep the clock monotonic use
    /// this and surface the failure.
    pub fn checked_add_minutes(self, minutes: f64) -> Option<SimTime> {
        if !minutes.is_finite() || minutes < 0.0 {
            return None;
        }
        let delta = (minutes * MS_PER_MINUTE as f64).round();
        if delta >= u64::MAX as f64 {
            return None;
        }
        self.0.checked_add(delta as u64).map(SimTime)
    }

    /// Add a non-negative travel estimate, saturating at [`SimTime::MAX`].
    ///
    /// Travel estimates come from validated configuration and are never
    /// negative; an out-of-range result compares later than any cutoff.
    pub fn saturating_add_minutes(self, minutes: f64) -> SimTime {
        debug_assert!(minutes >= 0.0, "travel estimate must be non-negative, got {minutes}");
        self.checked_add_minutes(minutes).unwrap_or(SimTime::MAX)
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier` is
    /// later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for SimTime {
    type Err = CoreError;

    /// Parse `HH:MM:SS` (24-hour clock, one or two digits per field).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let err = |reason: &str| CoreError::Time {
            value:  value.to_owned(),
            reason: reason.to_owned(),
        };

        let mut fields = value.trim().split(':');
        let mut next = |name: &str, limit: u64| -> Result<u64, CoreError> {
            let field = fields
                .next()
                .ok_or_else(|| err(&format!("missing {name} field")))?;
            if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err(&format!("{name} field {field:?} is not a 1–2 digit number")));
            }
            let n: u64 = field
                .parse()
                .map_err(|_| err(&format!("{name} field {field:?} is not a number")))?;
            if n >= limit {
                return Err(err(&format!("{name} {n} out of range (must be < {limit})")));
            }
            Ok(n)
        };

        let hours   = next("hour", 24)?;
        let minutes = next("minute", 60)?;
        let seconds = next("second", 60)?;
        if fields.next().is_some() {
            return Err(err("expected exactly three ':'-separated fields"));
        }
        Ok(SimTime::from_hms(hours, minutes, seconds))
    }
}

impl TryFrom<String> for SimTime {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SimTime> for String {
    fn from(time: SimTime) -> String {
        time.to_string()
    }
}
