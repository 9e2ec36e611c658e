//! Runtime configuration
//!
//! Resolved once at startup from CLI flags and environment variables, then
//! used to build the word source, the persistence gateway and the logger.

use crate::persistence::{FileStore, JsonGateway, STORAGE_KEY};
use crate::wordlists::{TieredWordSource, WordSourceError};
use std::path::PathBuf;

/// Directory name used under `$HOME` when no state directory is given
pub const DEFAULT_STATE_DIR_NAME: &str = ".wordle-engine";

/// Default `tracing` filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the saved game
    pub state_dir: PathBuf,
    /// Key the snapshot is stored under
    pub storage_key: String,
    /// Directory with custom `easy.txt`/`medium.txt`/`hard.txt` lists
    pub words_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible secrets
    pub seed: Option<u64>,
    /// `EnvFilter` directive, e.g. `warn` or `wordle_engine=debug`
    pub log_level: String,
    /// Append logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            storage_key: STORAGE_KEY.to_string(),
            words_dir: None,
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Word lists from `words_dir`, or the embedded ones, seeded if a seed is
    /// configured
    ///
    /// # Errors
    /// Returns `WordSourceError` if a list cannot be read or a tier is empty.
    pub fn word_source(&self) -> Result<TieredWordSource, WordSourceError> {
        let source = match &self.words_dir {
            Some(dir) => TieredWordSource::from_dir(dir)?,
            None => TieredWordSource::embedded()?,
        };
        Ok(match self.seed {
            Some(seed) => source.with_seed(seed),
            None => source,
        })
    }

    /// File-backed snapshot gateway rooted at the state directory
    #[must_use]
    pub fn gateway(&self) -> JsonGateway<FileStore> {
        JsonGateway::with_key(FileStore::new(&self.state_dir), self.storage_key.as_str())
    }
}

/// `$HOME/.wordle-engine`, or `.wordle-engine` in the working directory
#[must_use]
pub fn default_state_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(DEFAULT_STATE_DIR_NAME),
        |home| PathBuf::from(home).join(DEFAULT_STATE_DIR_NAME),
    )
}
