//! TUI rendering with ratatui
//!
//! Board, round status and session statistics for the Codebreaker interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{BULL_PEG, COW_PEG, MISS_PEG, format_countdown};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Round info and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🕵️ CODEBREAKER - {} ({} digits)",
        app.config.difficulty.name().to_uppercase(),
        app.round.code_length()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Pegs for one scored row, colored bull/cow/miss
fn peg_spans(bulls: usize, cows: usize, length: usize) -> Vec<Span<'static>> {
    let misses = length.saturating_sub(bulls + cows);
    let mut spans = Vec::with_capacity(length);

    spans.extend((0..bulls).map(|_| {
        Span::styled(BULL_PEG.to_string(), Style::default().fg(Color::Green))
    }));
    spans.extend((0..cows).map(|_| {
        Span::styled(COW_PEG.to_string(), Style::default().fg(Color::Yellow))
    }));
    spans.extend((0..misses).map(|_| {
        Span::styled(MISS_PEG.to_string(), Style::default().fg(Color::DarkGray))
    }));

    spans
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.round.code_length();
    let history = app.round.history();

    // Show the most recent rows that fit inside the borders
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let skip = history.len().saturating_sub(visible.saturating_sub(1));

    let mut lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, record)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<width$}", record.guess, width = length),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
            ];
            spans.extend(peg_spans(record.score.bulls, record.score.cows, length));
            spans.push(Span::styled(
                format!("  {}B {}C", record.score.bulls, record.score.cows),
                Style::default().fg(Color::Cyan),
            ));
            Line::from(spans)
        })
        .collect();

    if app.input_mode != InputMode::RoundOver {
        // Row being typed
        let pending = format!(
            "{}{}",
            app.input_buffer,
            "_".repeat(length.saturating_sub(app.input_buffer.len()))
        );
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3}. ", history.len() + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(pending, Style::default().fg(Color::Yellow)),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Round details
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_round_details(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.round.attempts();
    let max = app.round.max_attempts().max(1);
    let progress_pct = ((used * 100) / max).min(100) as u16;

    let color = if app.round.attempts_left() <= 2 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(progress_pct)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_round_details(f: &mut Frame, app: &App, area: Rect) {
    let length = app.round.code_length();

    // Known positions from hints, '?' elsewhere; the full code once the round is over
    let code_view: String = if let Some(secret) = app.round.revealed_secret() {
        secret.as_str().to_string()
    } else {
        let hints = app.round.revealed_hints();
        (0..length)
            .map(|i| {
                hints
                    .iter()
                    .find(|(index, _)| *index == i)
                    .map_or('?', |&(_, digit)| digit)
            })
            .collect()
    };

    let timer = match app.round.remaining_time() {
        Some(remaining) => {
            let color = if remaining.as_secs() <= 10 {
                Color::Red
            } else {
                Color::White
            };
            Span::styled(format_countdown(remaining), Style::default().fg(color))
        }
        None => Span::styled("untimed", Style::default().fg(Color::DarkGray)),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Code:    "),
            Span::styled(
                code_view,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Repeats: {}",
            if app.config.allow_repeats {
                "allowed"
            } else {
                "no"
            }
        )),
        Line::from(format!("Hints:   {} left", app.round.hints_left())),
        Line::from(vec![Span::raw("Timer:   "), timer]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for new round or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::ConfirmSurrender => (
            " Give up? y = yes, any other key = keep playing ",
            String::new(),
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter Guess (digits, Enter to submit, Backspace to delete) ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Mode: {}", app.config.difficulty);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.played,
        app.stats.win_percentage()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.input_mode == InputMode::RoundOver {
        "q: Quit | n: New Round"
    } else {
        "Esc: Quit | ?: Hint | !: Give Up"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretCode;
    use crate::round::{RoundConfig, RoundState};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn peg_spans_cover_the_code_length() {
        let spans = peg_spans(1, 2, 5);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "🟢🟡🟡⚫⚫");
    }

    #[test]
    fn renders_board_and_status() {
        let config = RoundConfig::default();
        let round = RoundState::with_secret(config.clone(), SecretCode::new("1234").unwrap());
        let mut app = App::with_round(config, round);
        for c in "5678".chars() {
            app.push_digit(c);
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("CODEBREAKER"));
        assert!(text.contains("5678"));
        assert!(text.contains("0B 0C"));
        assert!(text.contains("1/10 used"));
        assert!(text.contains("????"));
    }
}
