//! Difficulty presets and round configuration

use std::fmt;
use std::time::Duration;

/// Named difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 3 unique digits, 10 attempts
    Rookie,
    /// 4 unique digits, 10 attempts
    #[default]
    Standard,
    /// 5 unique digits, 12 attempts
    Expert,
    /// 4 digits with repeats, 12 attempts
    Master,
    /// 6 digits with repeats, 15 attempts
    Insane,
}

impl Difficulty {
    /// All presets, easiest first
    pub const ALL: [Self; 5] = [
        Self::Rookie,
        Self::Standard,
        Self::Expert,
        Self::Master,
        Self::Insane,
    ];

    /// Create a preset from its name
    ///
    /// Matching is case-insensitive. Defaults to standard if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "rookie" | "easy" => Self::Rookie,
            "expert" | "hard" => Self::Expert,
            "master" => Self::Master,
            "insane" => Self::Insane,
            _ => Self::Standard,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rookie => "rookie",
            Self::Standard => "standard",
            Self::Expert => "expert",
            Self::Master => "master",
            Self::Insane => "insane",
        }
    }

    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Rookie => 3,
            Self::Standard | Self::Master => 4,
            Self::Expert => 5,
            Self::Insane => 6,
        }
    }

    #[must_use]
    pub const fn allow_repeats(self) -> bool {
        matches!(self, Self::Master | Self::Insane)
    }

    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Rookie | Self::Standard => 10,
            Self::Expert | Self::Master => 12,
            Self::Insane => 15,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Settings for one round
///
/// Starts from a difficulty preset; any field can then be overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub difficulty: Difficulty,
    pub length: usize,
    pub allow_repeats: bool,
    pub max_attempts: usize,
    pub time_limit: Option<Duration>,
}

impl RoundConfig {
    #[must_use]
    pub const fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            length: difficulty.code_length(),
            allow_repeats: difficulty.allow_repeats(),
            max_attempts: difficulty.max_attempts(),
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub const fn with_repeats(mut self, allow_repeats: bool) -> Self {
        self.allow_repeats = allow_repeats;
        self
    }

    /// Override the attempt limit (at least one attempt is always allowed)
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }

    /// Set a time limit; `None` or a zero duration means untimed
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit.filter(|limit| !limit.is_zero());
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_their_tables() {
        let expected = [
            (Difficulty::Rookie, 3, false, 10),
            (Difficulty::Standard, 4, false, 10),
            (Difficulty::Expert, 5, false, 12),
            (Difficulty::Master, 4, true, 12),
            (Difficulty::Insane, 6, true, 15),
        ];

        for (difficulty, length, repeats, attempts) in expected {
            assert_eq!(difficulty.code_length(), length);
            assert_eq!(difficulty.allow_repeats(), repeats);
            assert_eq!(difficulty.max_attempts(), attempts);
        }
    }

    #[test]
    fn from_name_round_trips_and_defaults() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(difficulty.name()), difficulty);
        }
        assert_eq!(Difficulty::from_name("INSANE"), Difficulty::Insane);
        assert_eq!(Difficulty::from_name("nonsense"), Difficulty::Standard);
    }

    #[test]
    fn config_overrides_apply() {
        let config = RoundConfig::from_difficulty(Difficulty::Rookie)
            .with_length(7)
            .with_repeats(true)
            .with_max_attempts(3)
            .with_time_limit(Some(Duration::from_secs(60)));

        assert_eq!(config.difficulty, Difficulty::Rookie);
        assert_eq!(config.length, 7);
        assert!(config.allow_repeats);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.time_limit, Some(Duration::from_secs(60)));
    }

    #[test]
    fn zero_limits_are_normalized() {
        let config = RoundConfig::default()
            .with_max_attempts(0)
            .with_time_limit(Some(Duration::ZERO));

        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn default_is_standard() {
        let config = RoundConfig::default();
        assert_eq!(config.difficulty, Difficulty::Standard);
        assert_eq!(config.length, 4);
        assert!(!config.allow_repeats);
    }
}
