//! Guess validation
//!
//! Gates scoring: a guess must be all digits and exactly as long as the secret.

use super::CodeError;

/// Check a raw guess before it is scored
///
/// Digits are checked before length, so `"12a"` against a 4-digit code reports
/// the non-digit problem.
///
/// # Errors
/// - `CodeError::NonDigitInput` if the guess is empty or has any non-digit
///   character (signs, decimal points and whitespace included)
/// - `CodeError::WrongLengthInput` if the digit count differs from `expected_length`
///
/// # Examples
/// ```
/// use codebreaker::core::{CodeError, validate_input};
///
/// assert!(validate_input("1234", 4).is_ok());
/// assert_eq!(validate_input("12a4", 4), Err(CodeError::NonDigitInput));
/// assert_eq!(
///     validate_input("123", 4),
///     Err(CodeError::WrongLengthInput { expected: 4, actual: 3 })
/// );
/// ```
pub fn validate_input(guess: &str, expected_length: usize) -> Result<(), CodeError> {
    if guess.is_empty() || !guess.chars().all(|c| c.is_ascii_digit()) {
        return Err(CodeError::NonDigitInput);
    }

    // All ASCII at this point, so bytes == chars
    let actual = guess.len();
    if actual != expected_length {
        return Err(CodeError::WrongLengthInput {
            expected: expected_length,
            actual,
        });
    }

    Ok(())
}
