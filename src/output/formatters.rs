//! Formatting utilities for terminal output

use crate::core::Score;
use crate::round::{GuessRecord, Statistics};
use std::time::Duration;

/// Peg for a bull (right digit, right place)
pub const BULL_PEG: char = '🟢';
/// Peg for a cow (right digit, wrong place)
pub const COW_PEG: char = '🟡';
/// Peg for a digit that matched nothing
pub const MISS_PEG: char = '⚫';

/// Format a score as one peg per code position: bulls, then cows, then misses
#[must_use]
pub fn score_to_pegs(score: Score, length: usize) -> String {
    let mut result = String::with_capacity(length * 4);

    for _ in 0..score.bulls {
        result.push(BULL_PEG);
    }
    for _ in 0..score.cows {
        result.push(COW_PEG);
    }
    for _ in 0..score.misses(length) {
        result.push(MISS_PEG);
    }

    result
}

/// Build a spoiler-free summary of a round for sharing
///
/// One line of pegs per guess under a header naming the code length.
#[must_use]
pub fn share_grid(length: usize, history: &[GuessRecord]) -> String {
    let mut text = format!("🕵️ CodeBreaker ({length} Digits)\n");

    for record in history {
        text.push_str(&score_to_pegs(record.score, length));
        text.push('\n');
    }

    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a countdown as `MM:SS`
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// One line per winning attempt count: `  3: ████░░░░ 2`
#[must_use]
pub fn distribution_lines(stats: &Statistics, width: usize) -> Vec<String> {
    let max = stats.max_bucket() as f64;

    stats
        .distribution
        .iter()
        .map(|(&attempts, &count)| {
            let bar = create_progress_bar(count as f64, max, width);
            format!("  {attempts:>2}: {bar} {count}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_score() {
        assert_eq!(score_to_pegs(Score::new(1, 2), 4), "🟢🟡🟡⚫");
    }

    #[test]
    fn pegs_all_bulls() {
        assert_eq!(score_to_pegs(Score::new(4, 0), 4), "🟢🟢🟢🟢");
    }

    #[test]
    fn pegs_all_misses() {
        assert_eq!(score_to_pegs(Score::new(0, 0), 3), "⚫⚫⚫");
    }

    #[test]
    fn share_grid_has_header_and_rows() {
        let history = vec![
            GuessRecord {
                guess: "5678".to_string(),
                score: Score::new(0, 1),
            },
            GuessRecord {
                guess: "1234".to_string(),
                score: Score::new(4, 0),
            },
        ];

        let grid = share_grid(4, &history);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "🕵️ CodeBreaker (4 Digits)");
        assert_eq!(lines[1], "🟡⚫⚫⚫");
        assert_eq!(lines[2], "🟢🟢🟢🟢");
        assert!(!grid.contains("1234"), "grid must not leak guesses");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn countdown_format() {
        assert_eq!(format_countdown(Duration::from_secs(0)), "00:00");
        assert_eq!(format_countdown(Duration::from_secs(75)), "01:15");
        assert_eq!(format_countdown(Duration::from_millis(9_900)), "00:09");
    }

    #[test]
    fn distribution_lines_scale_to_largest_bucket() {
        let mut stats = Statistics::default();
        stats.record(true, 3);
        stats.record(true, 3);
        stats.record(true, 5);

        let lines = distribution_lines(&stats, 4);
        assert_eq!(lines, vec!["   3: ████ 2", "   5: ██░░ 1"]);
    }
}
