//! Core domain types for the puzzle
//!
//! Words, per-guess feedback, difficulty levels and the keyboard letter
//! status. Everything here is pure and free of I/O.

mod difficulty;
mod feedback;
mod keyboard;
mod word;

pub use difficulty::Difficulty;
pub use feedback::{Classification, Feedback, InvalidLengthError, evaluate};
pub use keyboard::KeyboardStatus;
pub use word::{WORD_LENGTH, Word, WordError};
