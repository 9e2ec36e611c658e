//! Snapshot persistence
//!
//! The game session only sees `PersistenceGateway`. `JsonGateway` implements
//! it over any `KeyValueStore`; store failures are reported as errors, while
//! absent or corrupt data loads as `None`.

mod gateway;
mod store;

pub use gateway::{JsonGateway, STORAGE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use crate::game::Snapshot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Saves and restores game snapshots
pub trait PersistenceGateway: Send + Sync {
    /// Store `snapshot`, replacing the previous one
    ///
    /// # Errors
    /// Returns `PersistenceError` if the snapshot could not be written.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Last saved snapshot; `None` if nothing usable is stored
    ///
    /// # Errors
    /// Returns `PersistenceError` only when the underlying store fails.
    fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;
}
