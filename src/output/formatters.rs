//! Formatting utilities for terminal output

use crate::core::{Classification, KeyboardStatus};
use crate::game::{GuessRow, Statistics};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the keyboard display
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile coloured by classification
#[must_use]
pub fn letter_tile(letter: char, classification: Option<Classification>) -> ColoredString {
    let text = format!(" {letter} ");
    match classification {
        Some(Classification::Correct) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A submitted row as coloured tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.cells()
        .map(|(letter, classification)| letter_tile(letter, Some(classification)).to_string())
        .collect()
}

/// The row being typed, padded with underscores
#[must_use]
pub fn pending_row(buffer: &str) -> String {
    buffer
        .chars()
        .chain(std::iter::repeat('_'))
        .take(crate::core::WORD_LENGTH)
        .map(|letter| letter_tile(letter, None).to_string())
        .collect()
}

/// Keyboard rows with each letter coloured by its best known status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| {
                    let status = keyboard.status_of(letter);
                    letter_tile(char::from(letter), status).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Emoji grid of the submitted rows, one line per row
#[must_use]
pub fn emoji_grid(rows: &[GuessRow]) -> String {
    rows.iter()
        .map(|row| row.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One bar per row count, scaled to the most frequent one
#[must_use]
pub fn distribution_bars(stats: &Statistics, width: usize) -> Vec<String> {
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar = create_progress_bar(count, max, width);
            format!("{}: {bar} {count}", i + 1)
        })
        .collect()
}
