//! Error type shared by the generator and the validator

use std::fmt;

/// Rejections produced by code generation and guess validation
///
/// All variants describe malformed input; none of them signal an internal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Requested code length is zero, or exceeds 10 with repeats disallowed
    InvalidLength(usize),
    /// Guess is empty or contains a character that is not a decimal digit
    NonDigitInput,
    /// Guess has the wrong number of digits
    WrongLengthInput { expected: usize, actual: usize },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Cannot build a code of {len} digits (unique codes allow 1 to 10)"
                )
            }
            Self::NonDigitInput => write!(f, "Input must be numbers only."),
            Self::WrongLengthInput { expected, .. } => {
                write!(f, "Input must be exactly {expected} digits.")
            }
        }
    }
}

impl std::error::Error for CodeError {}
