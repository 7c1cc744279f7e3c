//! Round management
//!
//! Everything that persists across guesses within a round lives in an explicit
//! `RoundState` owned by the caller, never in global state.

mod config;
mod state;
mod stats;

pub use config::{Difficulty, RoundConfig};
pub use state::{
    GuessRecord, GuessReport, HintOutcome, MAX_HINTS, Outcome, RoundError, RoundState,
};
pub use stats::Statistics;
