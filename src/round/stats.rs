//! Session statistics across rounds
//!
//! Kept in memory for the lifetime of the process only.

use super::{Outcome, RoundState};
use std::collections::BTreeMap;

/// Running totals for a play session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Winning attempt count -> number of wins
    pub distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Record a finished round
    pub fn record(&mut self, won: bool, attempts: usize) {
        self.played += 1;

        if won {
            self.won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            *self.distribution.entry(attempts).or_insert(0) += 1;
        } else {
            self.current_streak = 0;
        }
    }

    /// Record `round` if it has ended; rounds still in progress are ignored
    ///
    /// Returns whether the round was recorded.
    pub fn record_round(&mut self, round: &RoundState) -> bool {
        match round.outcome() {
            Some(outcome) => {
                self.record(outcome == Outcome::Win, round.attempts());
                true
            }
            None => false,
        }
    }

    /// Share of rounds won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }

    /// Largest bucket in the distribution, at least 1 so it can scale bars
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.distribution.values().copied().max().unwrap_or(0).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretCode;
    use crate::round::RoundConfig;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.played, 0);
        assert!(stats.win_percentage().abs() < f64::EPSILON);
        assert_eq!(stats.max_bucket(), 1);
    }

    #[test]
    fn streaks_track_consecutive_wins() {
        let mut stats = Statistics::default();
        stats.record(true, 3);
        stats.record(true, 5);
        stats.record(false, 10);
        stats.record(true, 3);

        assert_eq!(stats.played, 4);
        assert_eq!(stats.won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_percentage() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_counts_only_wins() {
        let mut stats = Statistics::default();
        stats.record(true, 4);
        stats.record(true, 4);
        stats.record(true, 7);
        stats.record(false, 10);

        assert_eq!(stats.distribution.get(&4), Some(&2));
        assert_eq!(stats.distribution.get(&7), Some(&1));
        assert_eq!(stats.distribution.get(&10), None);
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.won);
        assert_eq!(stats.max_bucket(), 2);
    }

    #[test]
    fn record_round_skips_unfinished_rounds() {
        let mut stats = Statistics::default();
        let mut round =
            RoundState::with_secret(RoundConfig::default(), SecretCode::new("1234").unwrap());

        assert!(!stats.record_round(&round));
        assert_eq!(stats.played, 0);

        round.submit_guess("1243").unwrap();
        round.submit_guess("1234").unwrap();
        assert!(stats.record_round(&round));
        assert_eq!(stats.won, 1);
        assert_eq!(stats.distribution.get(&2), Some(&1));
    }
}
