//! Codebreaker - CLI
//!
//! Bulls-and-cows code breaking game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{check_guess, generate_codes, run_simple, validate_guess},
    output::{
        print_check_result, print_generated_codes, print_presets, print_statistics,
        print_validation_result,
    },
    round::{Difficulty, RoundConfig},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Crack the secret digit code using bulls and cows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: rookie, standard (default), expert, master, insane
    #[arg(short, long, global = true, default_value = "standard")]
    difficulty: String,

    /// Override the code length
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Allow repeated digits in the code
    #[arg(short, long, global = true, conflicts_with = "no_repeats")]
    repeats: bool,

    /// Forbid repeated digits in the code
    #[arg(long, global = true)]
    no_repeats: bool,

    /// Override the maximum number of attempts
    #[arg(short, long, global = true)]
    max_attempts: Option<usize>,

    /// Time limit in seconds (0 = untimed)
    #[arg(short, long, global = true, default_value = "0")]
    time_limit: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Generate secret codes
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Score a guess against a known secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Check whether a guess is valid for the configured code length
    Validate {
        /// The guess to validate
        guess: String,
    },

    /// List the difficulty presets
    Presets,
}

/// Build the round configuration from the preset and any overrides
fn build_config(cli: &Cli) -> RoundConfig {
    let mut config = RoundConfig::from_difficulty(Difficulty::from_name(&cli.difficulty));

    if let Some(length) = cli.length {
        config = config.with_length(length);
    }
    if cli.repeats {
        config = config.with_repeats(true);
    } else if cli.no_repeats {
        config = config.with_repeats(false);
    }
    if let Some(max_attempts) = cli.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }

    config.with_time_limit(Some(Duration::from_secs(cli.time_limit)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = build_config(&cli);
    log::debug!("round config: {config:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Generate { count } => run_generate_command(&config, count),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Validate { guess } => {
            print_validation_result(&validate_guess(&guess, config.length));
            Ok(())
        }
        Commands::Presets => {
            print_presets();
            Ok(())
        }
    }
}

fn run_play_command(config: RoundConfig) -> Result<()> {
    use codebreaker::interactive::{App, run_tui};

    let app = App::new(config).context("could not start a round")?;
    let stats = run_tui(app)?;

    if stats.played > 0 {
        print_statistics(&stats)?;
    }
    Ok(())
}

fn run_simple_command(config: &RoundConfig) -> Result<()> {
    run_simple(config).context("simple mode failed")?;
    Ok(())
}

fn run_generate_command(config: &RoundConfig, count: usize) -> Result<()> {
    let codes = generate_codes(config, count)?;
    print_generated_codes(&codes, config);
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("secret must be a digit string")?;
    print_check_result(&result);
    Ok(())
}
