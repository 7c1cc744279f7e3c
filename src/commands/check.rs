//! One-shot scoring and validation commands

use crate::core::{CodeError, Score, SecretCode, validate_input};

/// Result of scoring one guess against a known secret
pub struct CheckResult {
    pub secret: SecretCode,
    pub guess: String,
    /// Whether the guess would pass validation in a real round
    pub validation: Result<(), CodeError>,
    pub score: Score,
}

impl CheckResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.validation.is_ok() && self.score.is_win(self.secret.len())
    }
}

/// Result of validating a guess against a code length
pub struct ValidationResult {
    pub guess: String,
    pub expected_length: usize,
    pub outcome: Result<(), CodeError>,
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Player-facing message: "Valid" or the rejection reason
    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(()) => "Valid".to_string(),
            Err(err) => err.to_string(),
        }
    }
}

/// Score `guess` against `secret`
///
/// The guess is validated and the outcome reported, but scoring runs either way so
/// malformed guesses can be inspected.
///
/// # Errors
/// Returns `CodeError::NonDigitInput` if the secret itself is not a digit string.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, CodeError> {
    let secret = SecretCode::new(secret.trim())?;
    let guess = guess.trim().to_string();

    let validation = validate_input(&guess, secret.len());
    let score = Score::calculate(secret.as_str(), &guess);

    Ok(CheckResult {
        secret,
        guess,
        validation,
        score,
    })
}

/// Validate `guess` for a code of `expected_length` digits
#[must_use]
pub fn validate_guess(guess: &str, expected_length: usize) -> ValidationResult {
    ValidationResult {
        guess: guess.to_string(),
        expected_length,
        outcome: validate_input(guess, expected_length),
    }
}
