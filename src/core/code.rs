//! Secret code generation
//!
//! A `SecretCode` is the hidden digit sequence a player tries to deduce during one round.

use super::CodeError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// The digit alphabet codes are drawn from
pub const DIGITS: [u8; 10] = *b"0123456789";

/// Longest code that can be built without repeating a digit
pub const MAX_UNIQUE_LENGTH: usize = DIGITS.len();

/// The hidden code for a round
///
/// Always non-empty and made only of ASCII digits. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretCode {
    digits: String,
}

impl SecretCode {
    /// Generate a random code using the thread-local generator
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if `length` is zero, or greater than 10
    /// while `allow_repeats` is false.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::SecretCode;
    ///
    /// let code = SecretCode::generate(4, false).unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert!(!code.has_repeats());
    ///
    /// assert!(SecretCode::generate(11, false).is_err());
    /// assert!(SecretCode::generate(11, true).is_ok());
    /// ```
    pub fn generate(length: usize, allow_repeats: bool) -> Result<Self, CodeError> {
        Self::generate_with(&mut rand::rng(), length, allow_repeats)
    }

    /// Generate a random code from the given random source
    ///
    /// With repeats every digit is drawn independently from 0-9. Without repeats the
    /// code is a uniform sample of distinct digits in random order.
    ///
    /// # Errors
    /// Same conditions as [`SecretCode::generate`].
    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        length: usize,
        allow_repeats: bool,
    ) -> Result<Self, CodeError> {
        if length == 0 || (!allow_repeats && length > MAX_UNIQUE_LENGTH) {
            return Err(CodeError::InvalidLength(length));
        }

        let digits: String = if allow_repeats {
            (0..length)
                .map(|_| char::from(DIGITS[rng.random_range(0..DIGITS.len())]))
                .collect()
        } else {
            let mut pool = DIGITS;
            let (sample, _) = pool.partial_shuffle(rng, length);
            sample.iter().map(|&d| char::from(d)).collect()
        };

        log::debug!("generated {length}-digit code (repeats: {allow_repeats}): {digits}");

        Ok(Self { digits })
    }

    /// Wrap an existing digit string as a code
    ///
    /// # Errors
    /// Returns `CodeError::NonDigitInput` if `text` is empty or contains anything
    /// other than ASCII digits.
    pub fn new(text: impl Into<String>) -> Result<Self, CodeError> {
        let digits: String = text.into();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CodeError::NonDigitInput);
        }

        Ok(Self { digits })
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; codes have at least one digit
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Get the digit at a position, if it exists
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> Option<char> {
        self.digits.as_bytes().get(position).map(|&b| char::from(b))
    }

    /// Check whether any digit appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        let mut seen = [false; 10];
        self.digits.bytes().any(|b| {
            let slot = &mut seen[usize::from(b - b'0')];
            std::mem::replace(slot, true)
        })
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl AsRef<str> for SecretCode {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unique_codes_have_distinct_digits_for_every_length() {
        let mut rng = StdRng::seed_from_u64(7);

        for length in 1..=MAX_UNIQUE_LENGTH {
            for _ in 0..50 {
                let code = SecretCode::generate_with(&mut rng, length, false).unwrap();
                assert_eq!(code.len(), length);
                assert!(!code.has_repeats(), "{code} repeats a digit");
                assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn unique_code_longer_than_alphabet_is_rejected() {
        assert_eq!(
            SecretCode::generate(11, false),
            Err(CodeError::InvalidLength(11))
        );
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(
            SecretCode::generate(0, true),
            Err(CodeError::InvalidLength(0))
        );
        assert_eq!(
            SecretCode::generate(0, false),
            Err(CodeError::InvalidLength(0))
        );
    }

    #[test]
    fn repeating_codes_may_exceed_ten_digits() {
        let code = SecretCode::generate(25, true).unwrap();
        assert_eq!(code.len(), 25);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn full_length_unique_code_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let code = SecretCode::generate_with(&mut rng, 10, false).unwrap();

        let mut sorted: Vec<char> = code.as_str().chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), "0123456789");
    }

    #[test]
    fn repeating_digits_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 10];

        for _ in 0..10_000 {
            let code = SecretCode::generate_with(&mut rng, 4, true).unwrap();
            for b in code.as_str().bytes() {
                counts[usize::from(b - b'0')] += 1;
            }
        }

        // 40,000 draws, 4,000 expected per digit
        for (digit, &count) in counts.iter().enumerate() {
            assert!(
                (3_500..=4_500).contains(&count),
                "digit {digit} drawn {count} times"
            );
        }
    }

    #[test]
    fn repeats_do_show_up_when_allowed() {
        let mut rng = StdRng::seed_from_u64(1);
        let any_repeat =
            (0..200).any(|_| SecretCode::generate_with(&mut rng, 6, true).unwrap().has_repeats());
        assert!(any_repeat);
    }

    #[test]
    fn new_accepts_only_digits() {
        assert_eq!(SecretCode::new("0042").unwrap().as_str(), "0042");
        assert_eq!(SecretCode::new(""), Err(CodeError::NonDigitInput));
        assert_eq!(SecretCode::new("12a4"), Err(CodeError::NonDigitInput));
        assert_eq!(SecretCode::new("-123"), Err(CodeError::NonDigitInput));
    }

    #[test]
    fn digit_at_and_display() {
        let code = SecretCode::new("9051").unwrap();
        assert_eq!(code.digit_at(0), Some('9'));
        assert_eq!(code.digit_at(3), Some('1'));
        assert_eq!(code.digit_at(4), None);
        assert_eq!(format!("{code}"), "9051");
    }

    #[test]
    fn has_repeats_detects_duplicates() {
        assert!(SecretCode::new("1122").unwrap().has_repeats());
        assert!(!SecretCode::new("1234").unwrap().has_repeats());
    }
}
