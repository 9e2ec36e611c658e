//! Submitted guess rows

use crate::core::{Classification, Feedback, Word};
use serde::{Deserialize, Serialize};

/// One submitted guess with its feedback
///
/// Rows are classified when they are created and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRow {
    letters: Word,
    classifications: Feedback,
}

impl GuessRow {
    /// Classify `guess` against `secret`
    #[must_use]
    pub fn new(guess: Word, secret: &Word) -> Self {
        let classifications = Feedback::calculate(&guess, secret);
        Self {
            letters: guess,
            classifications,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.letters
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.classifications
    }

    /// (letter, classification) pairs in position order
    pub fn cells(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        self.letters
            .letters()
            .iter()
            .zip(self.classifications.classifications())
            .map(|(&letter, &classification)| (char::from(letter), classification))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.classifications.is_solved()
    }

    /// Whether the stored feedback is what `secret` produces for this guess
    pub(crate) fn matches_secret(&self, secret: &Word) -> bool {
        Feedback::calculate(&self.letters, secret) == self.classifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Correct, Present};

    #[test]
    fn cells_pair_letters_with_feedback() {
        let row = GuessRow::new(Word::new("adept").unwrap(), &Word::new("above").unwrap());
        let cells: Vec<_> = row.cells().collect();
        assert_eq!(
            cells,
            vec![
                ('A', Correct),
                ('D', Absent),
                ('E', Present),
                ('P', Absent),
                ('T', Absent)
            ]
        );
        assert!(!row.is_solved());
    }

    #[test]
    fn matches_secret_detects_tampered_rows() {
        let secret = Word::new("above").unwrap();
        let row = GuessRow::new(Word::new("adept").unwrap(), &secret);
        assert!(row.matches_secret(&secret));
        assert!(!row.matches_secret(&Word::new("crane").unwrap()));
    }

    #[test]
    fn serializes_letters_and_classifications() {
        let row = GuessRow::new(Word::new("above").unwrap(), &Word::new("above").unwrap());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["letters"], "ABOVE");
        assert_eq!(json["classifications"][0], "CORRECT");
    }
}
