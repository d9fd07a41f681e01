//! Customer satisfaction tally and net score.

use dd_core::Rating;

/// Running counts of each [`Rating`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SatisfactionTally {
    pub promoters:  u64,
    pub neutrals:   u64,
    pub detractors: u64,
}

impl SatisfactionTally {
    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Promoter  => self.promoters += 1,
            Rating::Neutral   => self.neutrals += 1,
            Rating::Detractor => self.detractors += 1,
        }
    }

    /// Number of deliveries rated so far.
    pub fn total(&self) -> u64 {
        self.promoters + self.neutrals + self.detractors
    }

    /// Percentage of promoters minus percentage of detractors, rounded to
    /// two decimal places (half-to-even).  `0.0` before any delivery.
    ///
    /// Always within `-100.0..=100.0`.
    pub fn net_score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let raw = 100.0 * self.promoters as f64 / total - 100.0 * self.detractors as f64 / total;
        // `+ 0.0` folds a negative zero into zero.
        (raw * 100.0).round_ties_even() / 100.0 + 0.0
    }
}
