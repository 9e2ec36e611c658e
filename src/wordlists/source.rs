//! Secret selection and guess validation
//!
//! `WordSource` is the boundary the game session talks to. `TieredWordSource`
//! is the stock implementation backed by one vocabulary per difficulty.

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, EASY, HARD, MEDIUM};
use crate::core::{Difficulty, Word};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Supplies secrets and decides which guesses are accepted
pub trait WordSource: Send + Sync {
    /// Draw a secret from the vocabulary tier for `difficulty`
    fn pick_secret(&self, difficulty: Difficulty) -> Word;

    /// Whether `word` is an accepted dictionary entry
    fn is_valid_guess(&self, word: &Word) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("no words available for {0} games")]
    EmptyTier(Difficulty),

    #[error("failed to read word list {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// Word source with one secret vocabulary per difficulty
///
/// Every tier word is also a valid guess, as is every word in the extra
/// allowed list.
pub struct TieredWordSource {
    easy: Vec<Word>,
    medium: Vec<Word>,
    hard: Vec<Word>,
    dictionary: FxHashSet<Word>,
    rng: Mutex<StdRng>,
}

impl TieredWordSource {
    /// Build a source from explicit tiers
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyTier` if any tier has no words.
    pub fn new(
        easy: Vec<Word>,
        medium: Vec<Word>,
        hard: Vec<Word>,
        allowed: Vec<Word>,
    ) -> Result<Self, WordSourceError> {
        for (tier, words) in [
            (Difficulty::Easy, &easy),
            (Difficulty::Medium, &medium),
            (Difficulty::Hard, &hard),
        ] {
            if words.is_empty() {
                return Err(WordSourceError::EmptyTier(tier));
            }
        }

        let dictionary = easy
            .iter()
            .chain(&medium)
            .chain(&hard)
            .cloned()
            .chain(allowed)
            .collect();

        Ok(Self {
            easy,
            medium,
            hard,
            dictionary,
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Source backed by the word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyTier` if an embedded list is empty.
    pub fn embedded() -> Result<Self, WordSourceError> {
        Self::new(
            words_from_slice(EASY),
            words_from_slice(MEDIUM),
            words_from_slice(HARD),
            words_from_slice(ALLOWED),
        )
    }

    /// Source backed by `easy.txt`, `medium.txt`, `hard.txt` and an optional
    /// `allowed.txt` in `dir`
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::Unreadable` if a tier file cannot be read and
    /// `WordSourceError::EmptyTier` if one holds no valid words.
    pub fn from_dir(dir: &Path) -> Result<Self, WordSourceError> {
        let read = |name: &str, required: bool| {
            let path = dir.join(name);
            match load_from_file(&path) {
                Ok(words) => Ok(words),
                Err(e) if !required && e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
                Err(e) => Err(WordSourceError::Unreadable {
                    message: e.to_string(),
                    path,
                }),
            }
        };

        let source = Self::new(
            read("easy.txt", true)?,
            read("medium.txt", true)?,
            read("hard.txt", true)?,
            read("allowed.txt", false)?,
        )?;
        debug!(dir = %dir.display(), words = source.dictionary_len(), "loaded word lists");
        Ok(source)
    }

    /// Replace the random generator with a seeded one for reproducible games
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Secret vocabulary for a difficulty
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &[Word] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

impl WordSource for TieredWordSource {
    fn pick_secret(&self, difficulty: Difficulty) -> Word {
        let tier = self.tier(difficulty);
        let mut rng = self.rng.lock();
        // Tiers are checked non-empty at construction
        let secret = tier.choose(&mut *rng).unwrap_or(&tier[0]).clone();
        debug!(%difficulty, tier_size = tier.len(), "picked secret");
        secret
    }

    fn is_valid_guess(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }
}
