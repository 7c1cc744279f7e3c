//! Bulls and cows scoring
//!
//! A score counts, for one guess against the secret code:
//! - bulls: right digit in the right position
//! - cows: right digit in the wrong position, each secret digit consumed at most once

use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub bulls: usize,
    pub cows: usize,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Score `guess` against `secret`
    ///
    /// Never fails. Inputs are expected to be validated digit strings of equal length,
    /// but mismatched lengths are tolerated: bulls are counted over the common prefix
    /// and the excess tail of the longer input joins the leftovers used for cows.
    ///
    /// # Algorithm
    /// 1. First pass: count bulls over the common prefix, collecting mismatched digits
    /// 2. Append the excess tail of whichever input is longer to its leftovers
    /// 3. Second pass: walk the guess leftovers in order, consuming matching
    ///    secret leftovers from a digit count map
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Score;
    ///
    /// assert_eq!(Score::calculate("1234", "4321"), Score::new(0, 4));
    /// assert_eq!(Score::calculate("1122", "1111"), Score::new(2, 0));
    /// assert_eq!(Score::calculate("1234", "1243"), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &str, guess: &str) -> Self {
        let secret: Vec<char> = secret.chars().collect();
        let guess: Vec<char> = guess.chars().collect();
        let common = secret.len().min(guess.len());

        let mut bulls = 0;
        let mut secret_left: FxHashMap<char, usize> = FxHashMap::default();
        let mut guess_left: Vec<char> = Vec::with_capacity(guess.len());

        // First pass: exact matches over the shared prefix
        for (&s, &g) in secret.iter().zip(&guess) {
            if s == g {
                bulls += 1;
            } else {
                *secret_left.entry(s).or_insert(0) += 1;
                guess_left.push(g);
            }
        }

        // Only one of these tails is non-empty
        guess_left.extend_from_slice(&guess[common..]);
        for &s in &secret[common..] {
            *secret_left.entry(s).or_insert(0) += 1;
        }

        // Second pass: first-match consumption of the secret leftovers
        let mut cows = 0;
        for g in guess_left {
            if let Some(count) = secret_left.get_mut(&g)
                && *count > 0
            {
                cows += 1;
                *count -= 1;
            }
        }

        log::debug!("scored guess: {bulls} bulls, {cows} cows");

        Self { bulls, cows }
    }

    /// Check whether every position of a code of `length` digits was a bull
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.bulls == length
    }

    /// Digits of a `length`-digit code that scored neither bull nor cow
    #[inline]
    #[must_use]
    pub const fn misses(self, length: usize) -> usize {
        length.saturating_sub(self.bulls + self.cows)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bulls = if self.bulls == 1 { "bull" } else { "bulls" };
        let cows = if self.cows == 1 { "cow" } else { "cows" };
        write!(f, "{} {bulls}, {} {cows}", self.bulls, self.cows)
    }
}
