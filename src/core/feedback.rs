//! Guess feedback calculation and representation
//!
//! Feedback classifies each position of a guess against the secret:
//! - `Correct` = right letter, right position (green)
//! - `Present` = letter elsewhere in the secret (yellow)
//! - `Absent` = letter not available in the secret (gray)

use super::word::{WORD_LENGTH, Word, letter_counts};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Per-letter feedback category
///
/// Variants are declared in ascending precedence so the derived `Ord`
/// gives `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Single emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Guess and secret lengths disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("guess has {guess} letters and secret has {secret}, both must have 5")]
pub struct InvalidLengthError {
    pub guess: usize,
    pub secret: usize,
}

/// Feedback for one guess, one classification per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Classification::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and take them out of the secret's letter pool
    /// 2. Second pass: left to right, mark a letter present while the pool still holds it
    ///
    /// A letter guessed more often than it occurs in the secret is only credited as
    /// many times as the secret holds it; earlier positions win.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.classifications(), &[Present, Absent, Absent, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        classify(guess.letters(), secret.letters())
    }

    /// Per-position classifications in guess order
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

/// Evaluate a raw guess against a raw secret
///
/// Both inputs are compared case-insensitively and must be exactly five bytes.
///
/// # Errors
/// Returns `InvalidLengthError` if either input is not five bytes long.
pub fn evaluate(guess: &[u8], secret: &[u8]) -> Result<Feedback, InvalidLengthError> {
    match (uppercase(guess), uppercase(secret)) {
        (Some(guess), Some(secret)) => Ok(classify(&guess, &secret)),
        _ => Err(InvalidLengthError {
            guess: guess.len(),
            secret: secret.len(),
        }),
    }
}

fn uppercase(bytes: &[u8]) -> Option<[u8; WORD_LENGTH]> {
    let mut letters: [u8; WORD_LENGTH] = bytes.try_into().ok()?;
    letters.make_ascii_uppercase();
    Some(letters)
}

/// Two-pass classification of uppercase letters
fn classify(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> Feedback {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut available = letter_counts(secret);

    for ((slot, &letter), &expected) in result.iter_mut().zip(guess).zip(secret) {
        if letter == expected {
            *slot = Classification::Correct;
            take(&mut available, letter);
        }
    }

    for (slot, &letter) in result.iter_mut().zip(guess) {
        if *slot == Classification::Absent && take(&mut available, letter) {
            *slot = Classification::Present;
        }
    }

    Feedback(result)
}

/// Remove one `letter` from the pool, returning whether one was left
fn take(pool: &mut FxHashMap<u8, u8>, letter: u8) -> bool {
    match pool.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn classification_precedence() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn feedback_all_absent() {
        let result = feedback("abcde", "fghij");
        assert_eq!(result.classifications(), &[Absent; WORD_LENGTH]);
    }

    #[test]
    fn feedback_reflexive() {
        for word in ["crane", "slate", "above", "zzzzz", "aaaaa", "speed"] {
            assert!(feedback(word, word).is_solved(), "{word} vs itself");
        }
    }

    #[test]
    fn feedback_adept_against_above() {
        assert_eq!(
            feedback("adept", "above").classifications(),
            &[Correct, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_apple_against_crane() {
        assert_eq!(
            feedback("apple", "crane").classifications(),
            &[Present, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn feedback_exact_match_beats_earlier_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        assert_eq!(
            feedback("robot", "floor").classifications(),
            &[Present, Present, Absent, Correct, Absent]
        );
        // LLAMA vs HELLO: only two Ls in the secret, both credited as present
        assert_eq!(
            feedback("llama", "hello").classifications(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_extra_duplicates_are_absent() {
        // EERIE vs CRANE: one E in the secret at the end
        assert_eq!(
            feedback("eerie", "crane").classifications(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn feedback_duplicate_cap_holds_for_all_pairs() {
        let words = [
            "speed", "erase", "eerie", "geese", "level", "llama", "hello", "mamma", "crane",
            "apple", "poppy", "puppy",
        ];
        for guess in words {
            for secret in words {
                let result = feedback(guess, secret);
                let guess_word = Word::new(guess).unwrap();
                let secret_counts = letter_counts(Word::new(secret).unwrap().letters());
                for &letter in letter_counts(guess_word.letters()).keys() {
                    let credited = guess_word
                        .letters()
                        .iter()
                        .zip(result.classifications())
                        .filter(|&(&l, &c)| l == letter && c != Absent)
                        .count();
                    let cap = usize::from(secret_counts.get(&letter).copied().unwrap_or(0));
                    assert!(credited <= cap, "{guess} vs {secret}: letter {letter}");
                }
            }
        }
    }

    #[test]
    fn evaluate_matches_calculate() {
        for (guess, secret) in [("adept", "ABOVE"), ("robot", "floor"), ("EeRiE", "crane")] {
            assert_eq!(
                evaluate(guess.as_bytes(), secret.as_bytes()).unwrap(),
                feedback(guess, secret),
                "{guess} vs {secret}"
            );
        }
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        assert_eq!(
            evaluate(b"abcd", b"abcde"),
            Err(InvalidLengthError {
                guess: 4,
                secret: 5
            })
        );
        assert!(evaluate(b"abcdef", b"abcdef").is_err());
    }

    #[test]
    fn feedback_emoji() {
        assert_eq!(feedback("adept", "above").to_emoji(), "🟩⬜🟨⬜⬜");
        assert_eq!(Feedback::SOLVED.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_serializes_as_classification_list() {
        let json = serde_json::to_string(&feedback("apple", "crane")).unwrap();
        assert_eq!(
            json,
            r#"["PRESENT","ABSENT","ABSENT","ABSENT","CORRECT"]"#
        );
    }
}
