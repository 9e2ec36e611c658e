//! Input events and output notifications
//!
//! The presentation layer turns key presses into `Event`s and renders the
//! `Notification`s each transition returns.

use crate::core::{Classification, Difficulty, Feedback, Word};

/// Player input, identical for physical and on-screen keyboards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Letter(char),
    Backspace,
    Submit,
    /// Start over; `None` cycles to the next difficulty
    NewGame(Option<Difficulty>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The letters typed so far in the current row
    BufferChanged {
        row: usize,
        letters: String,
    },
    RowClassified {
        row: usize,
        feedback: Feedback,
    },
    KeyboardUpdated {
        letter: char,
        classification: Classification,
    },
    Won {
        rows_used: usize,
        streak: u32,
    },
    Lost {
        secret: Word,
    },
    NewGame {
        difficulty: Difficulty,
    },
    /// Saving failed; play continues in memory
    PersistenceDegraded {
        reason: String,
    },
}

impl Notification {
    /// Player-facing message, for notifications that carry one
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Won { .. } => Some("You win!".to_string()),
            Self::Lost { secret } => Some(format!("You lose! The word was {secret}")),
            Self::NewGame { difficulty } => Some(format!("New {difficulty} game started")),
            Self::PersistenceDegraded { reason } => {
                Some(format!("Progress will not be saved: {reason}"))
            }
            Self::BufferChanged { .. }
            | Self::RowClassified { .. }
            | Self::KeyboardUpdated { .. } => None,
        }
    }
}
