//! Single guess check command
//!
//! Evaluates one guess against one secret without touching the saved game.

use crate::core::{Feedback, Word};
use crate::wordlists::WordSource;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a game
    pub in_dictionary: bool,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(
    guess: &str,
    secret: &str,
    words: &dyn WordSource,
) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    Ok(CheckResult {
        feedback: Feedback::calculate(&guess, &secret),
        in_dictionary: words.is_valid_guess(&guess),
        guess,
        secret,
    })
}
