//! Display functions for command results

use super::formatters::{distribution_lines, score_to_pegs, share_grid};
use crate::commands::{CheckResult, ValidationResult};
use crate::core::SecretCode;
use crate::round::{Difficulty, Outcome, RoundConfig, RoundState, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against a {}-digit code",
        result.guess.bright_yellow().bold(),
        result.secret.len()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Err(err) = &result.validation {
        println!("{}", format!("⚠  {err} (scored anyway)").yellow());
    }

    println!(
        "\n  {}  {}",
        score_to_pegs(result.score, result.secret.len()),
        result.score
    );

    println!();
    if result.is_win() {
        println!("{}", "✅ Code cracked!".green().bold());
    }
}

/// Print the result of validating a guess
pub fn print_validation_result(result: &ValidationResult) {
    if result.is_valid() {
        println!(
            "{} {} is a valid {}-digit guess",
            "✅".green(),
            result.guess.bright_white().bold(),
            result.expected_length
        );
    } else {
        println!(
            "{} {:?}: {}",
            "❌".red(),
            result.guess,
            result.message().red()
        );
    }
}

/// Print freshly generated codes
pub fn print_generated_codes(codes: &[SecretCode], config: &RoundConfig) {
    println!(
        "{} {}-digit code(s), repeats {}:",
        "Generated".bright_cyan().bold(),
        config.length,
        if config.allow_repeats { "allowed" } else { "off" }
    );
    for code in codes {
        println!("  {}", code.as_str().bright_yellow());
    }
}

/// Print the table of difficulty presets
pub fn print_presets() {
    println!("\n{}", "═".repeat(48).cyan());
    println!(" {} ", "DIFFICULTY PRESETS".bright_cyan().bold());
    println!("{}", "═".repeat(48).cyan());
    println!("  {:<10} {:>6} {:>9} {:>10}", "name", "digits", "repeats", "attempts");

    for difficulty in Difficulty::ALL {
        println!(
            "  {:<10} {:>6} {:>9} {:>10}",
            difficulty.name().bright_white(),
            difficulty.code_length(),
            if difficulty.allow_repeats() { "yes" } else { "no" },
            difficulty.max_attempts()
        );
    }
}

/// Write the end-of-round banner, the secret and the share grid
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_round_summary<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    let secret = round.secret();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match round.outcome() {
        Some(Outcome::Win) => {
            writeln!(
                out,
                "{}",
                "    🎉  C O D E   C R A C K E D !  🎉    ".bright_green().bold()
            )?;
            let attempts = round.attempts();
            writeln!(
                out,
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        Some(Outcome::Loss) => {
            writeln!(out, "{}", "    💥  Out of luck!  💥    ".bright_red().bold())?;
        }
        None => {
            writeln!(out, "{}", "    Round in progress    ".bright_white())?;
        }
    }
    writeln!(
        out,
        "  The code was {}",
        secret.as_str().bright_yellow().bold()
    )?;

    writeln!(out, "\n{}", share_grid(secret.len(), round.history()))?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Write session statistics
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:      {}", stats.played)?;
    writeln!(
        out,
        "   Win rate:    {}",
        format!("{:.0}%", stats.win_percentage()).bright_yellow()
    )?;
    writeln!(out, "   Streak:      {}", stats.current_streak)?;
    writeln!(out, "   Best streak: {}", stats.max_streak)?;

    if !stats.distribution.is_empty() {
        writeln!(out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
        for line in distribution_lines(stats, 30) {
            writeln!(out, "{}", line.green())?;
        }
    }

    Ok(())
}

/// Print session statistics to stdout
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn print_statistics(stats: &Statistics) -> io::Result<()> {
    write_statistics(&mut io::stdout().lock(), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn round_summary_shows_secret_and_grid() {
        let mut round =
            RoundState::with_secret(RoundConfig::default(), SecretCode::new("4071").unwrap());
        round.submit_guess("4170").unwrap();
        round.submit_guess("4071").unwrap();

        let text = render(|out| write_round_summary(out, &round));

        assert!(text.contains("C O D E   C R A C K E D"));
        assert!(text.contains("4071"));
        assert!(text.contains("CodeBreaker (4 Digits)"));
        assert!(text.contains("🟢🟢🟡🟡"));
        assert!(text.contains("🟢🟢🟢🟢"));
    }

    #[test]
    fn round_summary_for_loss() {
        let mut round =
            RoundState::with_secret(RoundConfig::default(), SecretCode::new("4071").unwrap());
        round.surrender();

        let text = render(|out| write_round_summary(out, &round));
        assert!(text.contains("Out of luck"));
        assert!(text.contains("4071"));
    }

    #[test]
    fn statistics_block() {
        let mut stats = Statistics::default();
        stats.record(true, 4);
        stats.record(false, 10);

        let text = render(|out| write_statistics(out, &stats));
        assert!(text.contains("Played:      2"));
        assert!(text.contains("50%"));
        assert!(text.contains("Guess distribution"));
    }
}
