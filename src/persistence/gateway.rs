//! JSON snapshot gateway over a key-value store

use super::store::KeyValueStore;
use super::{PersistenceError, PersistenceGateway};
use crate::game::{SNAPSHOT_VERSION, Snapshot};
use tracing::{debug, warn};

/// Well-known key the game snapshot is stored under
pub const STORAGE_KEY: &str = "wordle-state";

/// Serializes snapshots as JSON under a single key
#[derive(Debug)]
pub struct JsonGateway<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonGateway<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Delete the saved snapshot
    ///
    /// # Errors
    /// Returns `PersistenceError::Store` if the store cannot be written.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}

impl<S: KeyValueStore> PersistenceGateway for JsonGateway<S> {
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "saved snapshot");
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Snapshot>(&json) {
            Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => Ok(Some(snapshot)),
            Ok(snapshot) => {
                warn!(
                    key = %self.key,
                    version = snapshot.version,
                    "ignoring snapshot with unsupported version"
                );
                Ok(None)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring corrupt snapshot");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Word};
    use crate::game::{GameStatus, GuessRow, Statistics};
    use crate::persistence::{FileStore, MemoryStore};

    fn sample_snapshot() -> Snapshot {
        let secret = Word::new("above").unwrap();
        let rows = ["adept", "alone"]
            .into_iter()
            .map(|g| GuessRow::new(Word::new(g).unwrap(), &secret))
            .collect();
        Snapshot {
            version: SNAPSHOT_VERSION,
            secret_word: secret,
            difficulty: Difficulty::Medium,
            rows,
            status: GameStatus::InProgress,
            win_streak: 3,
            pending: "AB".to_string(),
            statistics: Statistics::default(),
        }
    }

    #[test]
    fn save_then_load_returns_equal_snapshot() {
        let gateway = JsonGateway::new(MemoryStore::new());
        let snapshot = sample_snapshot();

        gateway.save(&snapshot).unwrap();
        assert_eq!(gateway.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn save_then_load_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = sample_snapshot();

        JsonGateway::new(FileStore::new(dir.path()))
            .save(&snapshot)
            .unwrap();
        let reopened = JsonGateway::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn load_from_empty_store_is_none() {
        let gateway = JsonGateway::new(MemoryStore::new());
        assert_eq!(gateway.load().unwrap(), None);
    }

    #[test]
    fn corrupt_data_loads_as_none() {
        let gateway = JsonGateway::new(MemoryStore::new());
        for junk in ["", "not json", "{\"version\":1}", "[1,2,3]"] {
            gateway.store().set(STORAGE_KEY, junk).unwrap();
            assert_eq!(gateway.load().unwrap(), None, "{junk:?}");
        }
    }

    #[test]
    fn invalid_secret_loads_as_none() {
        let gateway = JsonGateway::new(MemoryStore::new());
        let json = serde_json::to_string(&sample_snapshot())
            .unwrap()
            .replace("\"ABOVE\"", "\"ABOVES\"");
        gateway.store().set(STORAGE_KEY, &json).unwrap();

        assert_eq!(gateway.load().unwrap(), None);
    }

    #[test]
    fn unknown_version_loads_as_none() {
        let gateway = JsonGateway::new(MemoryStore::new());
        let mut snapshot = sample_snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        gateway.save(&snapshot).unwrap();

        assert_eq!(gateway.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_snapshot() {
        let gateway = JsonGateway::with_key(MemoryStore::new(), "custom");
        gateway.save(&sample_snapshot()).unwrap();
        assert!(gateway.store().get("custom").unwrap().is_some());

        gateway.clear().unwrap();
        assert_eq!(gateway.load().unwrap(), None);
    }
}
