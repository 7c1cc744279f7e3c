//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::output::formatters::{format_countdown, score_to_pegs};
use crate::output::{write_round_summary, write_statistics};
use crate::round::{HintOutcome, RoundConfig, RoundError, RoundState, Statistics};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// Returns the statistics gathered over the session.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the configured
/// code length cannot be generated.
pub fn run_simple(config: &RoundConfig) -> io::Result<Statistics> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(config, stdin.lock(), &mut stdout)
}

/// Run the game loop over arbitrary input and output streams
///
/// End of input ends the session the same way `quit` does.
///
/// # Errors
///
/// Same conditions as [`run_simple`].
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    config: &RoundConfig,
    mut input: R,
    out: &mut W,
) -> io::Result<Statistics> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Codebreaker - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Crack the secret code. After each guess you get:")?;
    writeln!(out, "  - 🟢 bull: right digit in the right position")?;
    writeln!(out, "  - 🟡 cow: right digit in the wrong position")?;
    writeln!(out, "  - ⚫ miss: digit not in the code (or already matched)\n")?;
    writeln!(
        out,
        "Commands: 'hint' (max 2), 'give up', 'new', 'stats', 'quit'\n"
    )?;

    let mut stats = Statistics::default();

    'session: loop {
        let mut round = RoundState::new(config.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "New {} round: {} digits, repeats {}, {} attempts",
            config.difficulty.name().bright_cyan().bold(),
            round.code_length(),
            if config.allow_repeats { "allowed" } else { "off" },
            round.max_attempts()
        )?;
        if let Some(remaining) = round.remaining_time() {
            writeln!(out, "⏱  Time limit: {}", format_countdown(remaining))?;
        }
        writeln!(out, "────────────────────────────────────────────────────────────")?;

        loop {
            if round.check_timeout() {
                write_time_up(out)?;
                break;
            }

            let mut prompt = format!("Guess {}/{}", round.attempts() + 1, round.max_attempts());
            if let Some(remaining) = round.remaining_time() {
                prompt.push_str(&format!(" [{}]", format_countdown(remaining)));
            }

            let Some(line) = get_user_input(&mut input, out, &prompt)? else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            };

            match line.to_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(stats);
                }
                "hint" | "h" => match round.hint() {
                    HintOutcome::RoundOver => {
                        write_time_up(out)?;
                        break;
                    }
                    hint => writeln!(out, "💡 {}\n", hint.message())?,
                },
                "give up" | "giveup" | "surrender" | "g" => {
                    round.surrender();
                    break;
                }
                "new" | "n" => {
                    writeln!(out, "\n🔄 New round started!\n")?;
                    continue 'session;
                }
                "stats" | "s" => {
                    write_statistics(out, &stats)?;
                    writeln!(out)?;
                }
                _ => match round.submit_guess(&line) {
                    Ok(report) => {
                        writeln!(
                            out,
                            "  {}  {}\n",
                            score_to_pegs(report.score, round.code_length()),
                            report.score
                        )?;
                        if report.game_over() {
                            break;
                        }
                    }
                    Err(RoundError::RoundOver) => {
                        if round.remaining_time() == Some(Duration::ZERO) {
                            write_time_up(out)?;
                        }
                        break;
                    }
                    Err(err) => {
                        writeln!(out, "{}\n", format!("❌ {err}").red())?;
                    }
                },
            }
        }

        stats.record_round(&round);
        write_round_summary(out, &round)?;

        let answer = get_user_input(&mut input, out, "Play again? (yes/no)")?;
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => {
                writeln!(out, "\n🔄 New round started!\n")?;
            }
            _ => {
                write_statistics(out, &stats)?;
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
        }
    }
}

fn write_time_up<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "⏰ TIME IS UP!".bright_red().bold())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
