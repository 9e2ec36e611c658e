//! Errors for rejected player input

use crate::core::Word;
use thiserror::Error;

/// Rejected game transitions
///
/// None of these change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not in word list!")]
    GuessNotInDictionary(Word),

    #[error("Not enough letters!")]
    NotEnoughLetters,

    #[error("Row is full, press Enter to submit")]
    RowFull,

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("Game is over, start a new game")]
    GameAlreadyOver,
}
