//! TUI application state and logic

use crate::core::CodeError;
use crate::round::{HintOutcome, Outcome, RoundConfig, RoundError, RoundState, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the screen refreshes while waiting for input (keeps the timer live)
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub config: RoundConfig,
    pub round: RoundState,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    ConfirmSurrender,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start its first round
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the configured code cannot be generated.
    pub fn new(config: RoundConfig) -> Result<Self, CodeError> {
        let round = RoundState::new(config.clone())?;
        Ok(Self::with_round(config, round))
    }

    /// Create the app around an existing round
    #[must_use]
    pub fn with_round(config: RoundConfig, round: RoundState) -> Self {
        let mut app = Self {
            config,
            round,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_round();
        app
    }

    fn announce_round(&mut self) {
        let text = format!(
            "New {} round: crack the {}-digit code{}",
            self.config.difficulty,
            self.round.code_length(),
            if self.config.allow_repeats {
                " (digits may repeat)"
            } else {
                ""
            }
        );
        self.add_message(&text, MessageStyle::Info);
        self.add_message(
            "Type digits, Enter to guess. '?' hint, '!' give up.",
            MessageStyle::Info,
        );
    }

    /// Add a digit to the pending guess, up to the code length
    pub fn push_digit(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_digit()
            && self.input_buffer.len() < self.round.code_length()
        {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_digit(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.round.submit_guess(&guess) {
            Ok(report) => {
                self.input_buffer.clear();
                if report.won() {
                    let celebration = match report.attempts {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                        2 | 3 => {
                            format!("🔥 MAGNIFICENT! Cracked in {} guesses! 🔥", report.attempts)
                        }
                        n => format!("🎉 Code cracked in {n} guesses! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.finish_round();
                } else if report.game_over() {
                    self.add_message("💥 Out of attempts!", MessageStyle::Error);
                    self.finish_round();
                } else {
                    self.add_message(
                        &format!("{guess}: {}", report.score),
                        MessageStyle::Info,
                    );
                }
            }
            Err(RoundError::RoundOver) => self.finish_round_on_time_up(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self) {
        let hint = self.round.hint();
        if hint == HintOutcome::RoundOver {
            self.finish_round_on_time_up();
            return;
        }
        let style = match hint {
            HintOutcome::Revealed { .. } => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        self.add_message(&format!("💡 {}", hint.message()), style);
    }

    pub fn surrender(&mut self) {
        self.round.surrender();
        self.add_message("🏳 You gave up.", MessageStyle::Error);
        self.finish_round();
    }

    /// Per-tick housekeeping: end the round if its time limit ran out
    pub fn tick(&mut self) {
        if self.round.check_timeout() {
            self.finish_round_on_time_up();
        }
    }

    fn finish_round_on_time_up(&mut self) {
        if self.input_mode != InputMode::RoundOver
            && self.round.remaining_time() == Some(Duration::ZERO)
        {
            self.add_message("⏰ TIME IS UP!", MessageStyle::Error);
        }
        self.finish_round();
    }

    fn finish_round(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }
        self.stats.record_round(&self.round);
        self.input_mode = InputMode::RoundOver;

        let secret = self.round.secret().as_str().to_string();
        let style = match self.round.outcome() {
            Some(Outcome::Win) => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        self.add_message(&format!("The code was {secret}"), style);
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the current round (if any) and start another with the same settings
    pub fn new_round(&mut self) {
        match RoundState::new(self.config.clone()) {
            Ok(round) => {
                self.round = round;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_round();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Route a key press according to the current input mode
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let KeyCode::Char('c') = code
            && modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_digit() => self.push_digit(c),
                KeyCode::Char('?' | 'h') => self.request_hint(),
                KeyCode::Char('!') => {
                    self.input_mode = InputMode::ConfirmSurrender;
                    self.add_message("Give up this round? (y/n)", MessageStyle::Info);
                }
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Backspace => self.pop_digit(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::ConfirmSurrender => match code {
                KeyCode::Char('y' | 'Y') => self.surrender(),
                _ => {
                    self.input_mode = InputMode::Guessing;
                    self.add_message("Keep going!", MessageStyle::Info);
                }
            },
            InputMode::RoundOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {
                    // Round finished, ignore other keys
                }
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretCode;

    fn app_with(secret: &str) -> App {
        let config = RoundConfig::default();
        let round = RoundState::with_secret(config.clone(), SecretCode::new(secret).unwrap());
        App::with_round(config, round)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            let code = match c {
                '\n' => KeyCode::Enter,
                '\u{8}' => KeyCode::Backspace,
                c => KeyCode::Char(c),
            };
            app.handle_key(code, KeyModifiers::NONE);
        }
    }

    #[test]
    fn input_is_limited_to_code_length_digits() {
        let mut app = app_with("1234");
        type_keys(&mut app, "12x345");
        assert_eq!(app.input_buffer, "1234");

        type_keys(&mut app, "\u{8}");
        assert_eq!(app.input_buffer, "123");
    }

    #[test]
    fn short_guess_is_rejected_without_using_an_attempt() {
        let mut app = app_with("1234");
        type_keys(&mut app, "12\n");

        assert_eq!(app.round.attempts(), 0);
        assert_eq!(app.input_buffer, "12");
        assert!(app.messages.iter().any(|m| m.text.contains("exactly 4 digits")));
    }

    #[test]
    fn winning_records_stats_and_waits_for_new_round() {
        let mut app = app_with("1234");
        type_keys(&mut app, "4321\n1234\n");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.won, 1);
        assert_eq!(app.stats.distribution.get(&2), Some(&1));

        // Digits are ignored until a new round starts
        type_keys(&mut app, "5");
        assert!(app.input_buffer.is_empty());

        type_keys(&mut app, "n");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.attempts(), 0);
        assert_eq!(app.stats.played, 1);
    }

    #[test]
    fn surrender_needs_confirmation() {
        let mut app = app_with("1234");

        type_keys(&mut app, "!x");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.round.is_over());

        type_keys(&mut app, "!y");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.round.outcome(), Some(Outcome::Loss));
        assert_eq!(app.stats.played, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("1234")));
    }

    #[test]
    fn hint_key_reveals_up_to_two_positions() {
        let mut app = app_with("1234");
        type_keys(&mut app, "???");

        assert_eq!(app.round.revealed_hints().len(), 2);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("No hints remaining"))
        );
    }

    #[test]
    fn tick_ends_an_expired_round() {
        let config = RoundConfig::default().with_time_limit(Some(Duration::from_nanos(1)));
        let round = RoundState::with_secret(config.clone(), SecretCode::new("1234").unwrap());
        let mut app = App::with_round(config, round);
        std::thread::sleep(Duration::from_millis(5));

        app.tick();
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.round.outcome(), Some(Outcome::Loss));
        assert_eq!(app.stats.played, 1);
        assert_eq!(app.stats.won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("TIME IS UP")));

        // Later ticks do not record the round twice
        app.tick();
        assert_eq!(app.stats.played, 1);
    }

    #[test]
    fn hint_after_the_deadline_ends_the_round() {
        let config = RoundConfig::default().with_time_limit(Some(Duration::from_nanos(1)));
        let round = RoundState::with_secret(config.clone(), SecretCode::new("1234").unwrap());
        let mut app = App::with_round(config, round);
        std::thread::sleep(Duration::from_millis(5));

        type_keys(&mut app, "?");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.round.revealed_hints().is_empty());
        assert_eq!(app.stats.played, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("TIME IS UP")));
    }

    #[test]
    fn tick_leaves_a_running_round_alone() {
        let config = RoundConfig::default().with_time_limit(Some(Duration::from_secs(3600)));
        let round = RoundState::with_secret(config.clone(), SecretCode::new("1234").unwrap());
        let mut app = App::with_round(config, round);

        app.tick();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.played, 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with("1234");
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = app_with("1234");
        type_keys(&mut app, "q");
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app_with("1234");
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
