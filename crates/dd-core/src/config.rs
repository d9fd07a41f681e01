//! Depot configuration.

use crate::{Coordinate, CoreError, CoreResult, SimTime};

/// Operating parameters of one warehouse and its drone.
///
/// Typically built from [`Default`] and optionally overridden from a JSON
/// file by the application crate (requires the `serde` feature).  Every
/// field has a default, so a partial file is enough.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DepotConfig {
    /// Logical clock value when the streamer starts.  Default: 06:00:00.
    pub opens_at: SimTime,

    /// The drone must be back at the warehouse no later than this.
    /// Default: 22:00:00.
    pub closes_at: SimTime,

    /// Where the warehouse sits on the grid.  Default: the origin.
    pub position: Coordinate,

    /// Outbound flight time per grid step, in minutes.  Default: 1.
    pub minutes_per_step: f64,

    /// Return flight time as a fraction of outbound time.  The unladen
    /// drone flies home faster.  Default: 0.5.
    pub return_ratio: f64,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            opens_at:         SimTime::from_hms(6, 0, 0),
            closes_at:        SimTime::from_hms(22, 0, 0),
            position:         Coordinate::ORIGIN,
            minutes_per_step: 1.0,
            return_ratio:     0.5,
        }
    }
}

impl DepotConfig {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.closes_at < self.opens_at {
            return Err(CoreError::Config(format!(
                "closes_at {} is before opens_at {}",
                self.closes_at, self.opens_at
            )));
        }
        if !self.minutes_per_step.is_finite() || self.minutes_per_step <= 0.0 {
            return Err(CoreError::Config(format!(
                "minutes_per_step must be a positive number, got {}",
                self.minutes_per_step
            )));
        }
        if !self.return_ratio.is_finite() || self.return_ratio <= 0.0 {
            return Err(CoreError::Config(format!(
                "return_ratio must be a positive number, got {}",
                self.return_ratio
            )));
        }
        Ok(())
    }
}
