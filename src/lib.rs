//! Codebreaker
//!
//! A Mastermind-style number guessing game: crack a hidden digit code using bulls
//! (right digit, right place) and cows (right digit, wrong place) as feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Score, SecretCode, validate_input};
//!
//! // Generate a 4-digit code without repeated digits
//! let secret = SecretCode::generate(4, false).unwrap();
//!
//! // Validate and score a guess
//! let guess = "1234";
//! validate_input(guess, secret.len()).unwrap();
//! let score = Score::calculate(secret.as_str(), guess);
//! println!("{} bulls, {} cows", score.bulls, score.cows);
//! ```

// Core domain types
pub mod core;

// Round state, presets and statistics
pub mod round;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
