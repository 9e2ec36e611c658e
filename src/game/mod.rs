//! Game session model
//!
//! - `session`: the state machine and its transitions
//! - `shared`: mutex-guarded handle for multi-threaded callers
//! - `events`: input events and output notifications
//! - `snapshot`: the persisted projection

mod error;
mod events;
mod row;
mod session;
mod shared;
mod snapshot;
mod stats;

pub use error::GameError;
pub use events::{Event, Notification};
pub use row::GuessRow;
pub use session::{GameSession, GameStatus, MAX_ROWS};
pub use shared::SharedSession;
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};
pub use stats::Statistics;

#[cfg(test)]
pub(crate) mod testing {
    use super::Snapshot;
    use crate::core::{Difficulty, Word};
    use crate::persistence::{PersistenceError, PersistenceGateway, StoreError};
    use crate::wordlists::WordSource;
    use parking_lot::Mutex;

    /// Hands out secrets in a fixed order, cycling when exhausted
    ///
    /// Secrets and the extra dictionary words are the only valid guesses.
    pub struct ScriptedWords {
        secrets: Vec<Word>,
        dictionary: Vec<Word>,
        picks: Mutex<Vec<Difficulty>>,
    }

    impl ScriptedWords {
        pub fn new(secrets: &[&str]) -> Self {
            Self {
                secrets: secrets.iter().map(|s| Word::new(*s).unwrap()).collect(),
                dictionary: Vec::new(),
                picks: Mutex::new(Vec::new()),
            }
        }

        pub fn with_dictionary(mut self, words: &[&str]) -> Self {
            self.dictionary = words.iter().map(|s| Word::new(*s).unwrap()).collect();
            self
        }

        /// Difficulties passed to `pick_secret`, in call order
        pub fn requested(&self) -> Vec<Difficulty> {
            self.picks.lock().clone()
        }
    }

    impl WordSource for ScriptedWords {
        fn pick_secret(&self, difficulty: Difficulty) -> Word {
            let mut picks = self.picks.lock();
            let secret = self.secrets[picks.len() % self.secrets.len()].clone();
            picks.push(difficulty);
            secret
        }

        fn is_valid_guess(&self, word: &Word) -> bool {
            self.secrets.contains(word) || self.dictionary.contains(word)
        }
    }

    /// Gateway whose store is always unavailable
    pub struct FailingGateway;

    impl PersistenceGateway for FailingGateway {
        fn save(&self, _: &Snapshot) -> Result<(), PersistenceError> {
            Err(StoreError::Unavailable("disk full".to_string()).into())
        }

        fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
            Err(StoreError::Unavailable("disk full".to_string()).into())
        }
    }
}
