//! State of a single round
//!
//! `RoundState` owns the secret code and everything that changes while a player works
//! through it: attempts used, hints revealed, guess history and the final outcome.
//! The core scoring functions stay pure; this type is the only thing that mutates.

use super::RoundConfig;
use crate::core::{CodeError, Score, SecretCode, validate_input};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::time::{Duration, Instant};

/// Hints allowed per round
pub const MAX_HINTS: usize = 2;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// A scored guess kept in the round history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub score: Score,
}

/// Result of submitting a valid guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub score: Score,
    pub attempts: usize,
    pub outcome: Option<Outcome>,
    /// Only revealed once the round is over
    pub secret: Option<String>,
}

impl GuessReport {
    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }
}

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// Position `index` (0-based) of the secret holds `digit`
    Revealed { index: usize, digit: char },
    /// The per-round hint budget is spent
    Exhausted,
    /// Every position has already been revealed
    AllRevealed,
    /// The round has already ended
    RoundOver,
}

impl HintOutcome {
    /// Player-facing description of the hint
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Revealed { index, digit } => {
                format!("HINT: Position {} is {digit}", index + 1)
            }
            Self::Exhausted => "No hints remaining! You are on your own.".to_string(),
            Self::AllRevealed => "All numbers revealed!".to_string(),
            Self::RoundOver => "The round is over.".to_string(),
        }
    }
}

/// Rejection of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The guess failed validation and was not counted
    Invalid(CodeError),
    /// The round already ended
    RoundOver,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::RoundOver => write!(f, "The round is over. Start a new one to keep playing."),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::RoundOver => None,
        }
    }
}

impl From<CodeError> for RoundError {
    fn from(err: CodeError) -> Self {
        Self::Invalid(err)
    }
}

/// One round of Codebreaker
#[derive(Debug, Clone)]
pub struct RoundState {
    config: RoundConfig,
    secret: SecretCode,
    attempts: usize,
    revealed: Vec<usize>,
    history: Vec<GuessRecord>,
    outcome: Option<Outcome>,
    started: Instant,
}

impl RoundState {
    /// Start a round with a freshly generated secret
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the configured length cannot be generated.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::round::{Difficulty, RoundConfig, RoundState};
    ///
    /// let round = RoundState::new(RoundConfig::from_difficulty(Difficulty::Expert)).unwrap();
    /// assert_eq!(round.code_length(), 5);
    /// assert_eq!(round.attempts_left(), 12);
    /// assert!(!round.is_over());
    /// ```
    pub fn new(config: RoundConfig) -> Result<Self, CodeError> {
        let secret = SecretCode::generate(config.length, config.allow_repeats)?;
        Ok(Self::with_secret(config, secret))
    }

    /// Start a round with a known secret
    ///
    /// The configured length is replaced by the secret's length.
    #[must_use]
    pub fn with_secret(mut config: RoundConfig, secret: SecretCode) -> Self {
        config.length = secret.len();

        log::info!(
            "new {} round: {} digits, repeats {}, {} attempts",
            config.difficulty,
            config.length,
            if config.allow_repeats { "on" } else { "off" },
            config.max_attempts
        );
        log::debug!("secret code: {secret}");

        Self {
            config,
            secret,
            attempts: 0,
            revealed: Vec::new(),
            history: Vec::new(),
            outcome: None,
            started: Instant::now(),
        }
    }

    /// Validate, score and record a guess
    ///
    /// Only valid guesses consume an attempt. The round is won when every digit is a
    /// bull, and lost when the attempt limit is reached without a win.
    ///
    /// # Errors
    /// - `RoundError::RoundOver` if the round already ended (including by timeout)
    /// - `RoundError::Invalid` if the guess fails validation
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessReport, RoundError> {
        self.check_timeout();
        if self.is_over() {
            return Err(RoundError::RoundOver);
        }

        let guess = guess.trim();
        validate_input(guess, self.secret.len())?;

        let score = Score::calculate(self.secret.as_str(), guess);
        self.attempts += 1;
        self.history.push(GuessRecord {
            guess: guess.to_string(),
            score,
        });

        if score.is_win(self.secret.len()) {
            log::info!("round won in {} attempts", self.attempts);
            self.outcome = Some(Outcome::Win);
        } else if self.attempts >= self.config.max_attempts {
            log::info!("round lost: out of attempts");
            self.outcome = Some(Outcome::Loss);
        }

        Ok(GuessReport {
            score,
            attempts: self.attempts,
            outcome: self.outcome,
            secret: self.revealed_secret().map(|s| s.as_str().to_string()),
        })
    }

    /// Reveal one random, not yet revealed position of the secret
    pub fn hint(&mut self) -> HintOutcome {
        self.hint_with(&mut rand::rng())
    }

    /// Reveal a position chosen with the given random source
    pub fn hint_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> HintOutcome {
        self.check_timeout();
        if self.is_over() {
            return HintOutcome::RoundOver;
        }
        if self.revealed.len() >= MAX_HINTS {
            return HintOutcome::Exhausted;
        }

        let available: Vec<usize> = (0..self.secret.len())
            .filter(|i| !self.revealed.contains(i))
            .collect();

        let Some(&index) = available.choose(rng) else {
            return HintOutcome::AllRevealed;
        };
        let Some(digit) = self.secret.digit_at(index) else {
            return HintOutcome::AllRevealed;
        };

        self.revealed.push(index);
        log::info!("hint {} of {MAX_HINTS}: position {}", self.revealed.len(), index + 1);

        HintOutcome::Revealed { index, digit }
    }

    /// Give up; the round ends as a loss and the secret is returned
    pub fn surrender(&mut self) -> &SecretCode {
        self.check_timeout();
        if self.outcome.is_none() {
            log::info!("round surrendered after {} attempts", self.attempts);
            self.outcome = Some(Outcome::Loss);
        }
        &self.secret
    }

    /// End the round as a loss if its time limit has run out
    ///
    /// Returns true only when this call ended the round.
    pub fn check_timeout(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        match self.config.time_limit {
            Some(limit) if self.started.elapsed() >= limit => {
                log::info!("round lost: time limit of {}s reached", limit.as_secs());
                self.outcome = Some(Outcome::Loss);
                true
            }
            _ => false,
        }
    }

    /// Time left before the limit, or `None` for untimed rounds
    #[must_use]
    pub fn remaining_time(&self) -> Option<Duration> {
        self.config
            .time_limit
            .map(|limit| limit.saturating_sub(self.started.elapsed()))
    }

    /// The secret, available once the round is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&SecretCode> {
        if self.outcome.is_some() {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// The secret regardless of round state, for the owning caller
    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn hints_left(&self) -> usize {
        MAX_HINTS.saturating_sub(self.revealed.len())
    }

    /// Revealed hints as (position, digit), in the order they were given
    #[must_use]
    pub fn revealed_hints(&self) -> Vec<(usize, char)> {
        self.revealed
            .iter()
            .filter_map(|&i| self.secret.digit_at(i).map(|d| (i, d)))
            .collect()
    }
}
