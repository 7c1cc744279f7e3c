//! Core game logic for Codebreaker
//!
//! Stateless building blocks: secret code generation, bulls/cows scoring and guess
//! validation. Nothing here holds state between calls.

mod code;
mod error;
mod score;
mod validate;

pub use code::{DIGITS, MAX_UNIQUE_LENGTH, SecretCode};
pub use error::CodeError;
pub use score::Score;
pub use validate::validate_input;
