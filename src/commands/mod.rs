//! Command implementations

pub mod check;
pub mod generate;
pub mod simple;

pub use check::{CheckResult, ValidationResult, check_guess, validate_guess};
pub use generate::generate_codes;
pub use simple::{run_simple, run_simple_with};
