//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_generated_codes, print_presets, print_statistics,
    print_validation_result, write_round_summary, write_statistics,
};
