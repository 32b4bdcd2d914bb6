//! Formatting utilities for terminal output

use crate::core::{LetterState, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles following its feedback
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .as_bytes()
        .iter()
        .zip(pattern.states())
        .map(|(&letter, state)| tile(letter, state).to_string())
        .collect()
}

fn tile(letter: u8, state: LetterState) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // In [0, width] after the clamp
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
