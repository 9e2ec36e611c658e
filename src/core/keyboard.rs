//! On-screen keyboard letter status
//!
//! Tracks the best classification seen for each letter over a game. Status
//! only moves up the precedence order, so a letter once shown `Correct` stays
//! `Correct` even when a later guess places it elsewhere.

use super::feedback::{Classification, Feedback};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Best-known classification per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, Classification>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation for `letter`, upgrading its status if it ranks higher
    ///
    /// Letters are case-insensitive. Returns `true` if the stored status changed.
    pub fn record(&mut self, letter: u8, classification: Classification) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.letters.get_mut(&letter) {
            Some(current) if *current >= classification => false,
            Some(current) => {
                *current = classification;
                true
            }
            None => {
                self.letters.insert(letter, classification);
                true
            }
        }
    }

    /// Record every letter of a classified guess
    ///
    /// Returns the letters whose status changed, in guess order and without repeats.
    pub fn record_guess(&mut self, guess: &Word, feedback: &Feedback) -> Vec<(u8, Classification)> {
        let mut changed: Vec<(u8, Classification)> = Vec::new();
        for (&letter, &classification) in guess.letters().iter().zip(feedback.classifications()) {
            if self.record(letter, classification) {
                changed.retain(|&(l, _)| l != letter);
                changed.push((letter, classification));
            }
        }
        changed
    }

    /// Status of `letter`, or `None` if it has not been guessed yet
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<Classification> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// All known letters in alphabetical order
    #[must_use]
    pub fn known(&self) -> Vec<(u8, Classification)> {
        let mut known: Vec<_> = self.letters.iter().map(|(&l, &c)| (l, c)).collect();
        known.sort_unstable_by_key(|&(l, _)| l);
        known
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn unknown_letter_has_no_status() {
        let keyboard = KeyboardStatus::new();
        assert_eq!(keyboard.status_of(b'A'), None);
    }

    #[test]
    fn record_upgrades_in_precedence_order() {
        let mut keyboard = KeyboardStatus::new();
        assert!(keyboard.record(b'E', Absent));
        assert!(keyboard.record(b'E', Present));
        assert!(!keyboard.record(b'E', Absent));
        assert_eq!(keyboard.status_of(b'E'), Some(Present));
        assert!(keyboard.record(b'E', Correct));
        assert_eq!(keyboard.status_of(b'e'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record(b'A', Correct);
        for later in [Absent, Present, Correct, Absent] {
            assert!(!keyboard.record(b'A', later));
            assert_eq!(keyboard.status_of(b'A'), Some(Correct));
        }
    }

    #[test]
    fn record_guess_keeps_best_of_duplicates() {
        // APPLE vs CRANE: both P's are absent, A present, E correct
        let guess = Word::new("apple").unwrap();
        let secret = Word::new("crane").unwrap();
        let feedback = Feedback::calculate(&guess, &secret);

        let mut keyboard = KeyboardStatus::new();
        let changed = keyboard.record_guess(&guess, &feedback);

        assert_eq!(
            changed,
            vec![
                (b'A', Present),
                (b'P', Absent),
                (b'L', Absent),
                (b'E', Correct),
            ]
        );
        assert_eq!(keyboard.status_of(b'A'), Some(Present));
        assert_eq!(keyboard.status_of(b'P'), Some(Absent));
        assert_eq!(keyboard.status_of(b'E'), Some(Correct));
    }

    #[test]
    fn record_guess_reports_only_changes() {
        let secret = Word::new("above").unwrap();
        let first = Word::new("adept").unwrap();
        let second = Word::new("alone").unwrap();

        let mut keyboard = KeyboardStatus::new();
        keyboard.record_guess(&first, &Feedback::calculate(&first, &secret));
        let changed = keyboard.record_guess(&second, &Feedback::calculate(&second, &secret));

        // A was already correct; E upgrades from present to correct
        assert_eq!(
            changed,
            vec![
                (b'L', Absent),
                (b'O', Correct),
                (b'N', Absent),
                (b'E', Correct),
            ]
        );
    }

    #[test]
    fn known_is_sorted_and_clear_resets() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record(b'Z', Absent);
        keyboard.record(b'B', Present);
        assert_eq!(keyboard.known(), vec![(b'B', Present), (b'Z', Absent)]);

        keyboard.clear();
        assert!(keyboard.known().is_empty());
    }
}
