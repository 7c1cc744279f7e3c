//! Code generation command

use crate::core::{CodeError, SecretCode};
use crate::round::RoundConfig;

/// Generate `count` codes using the length and repeat setting of `config`
///
/// # Errors
/// Returns `CodeError::InvalidLength` if the configured length cannot be generated.
pub fn generate_codes(config: &RoundConfig, count: usize) -> Result<Vec<SecretCode>, CodeError> {
    (0..count)
        .map(|_| SecretCode::generate(config.length, config.allow_repeats))
        .collect()
}
