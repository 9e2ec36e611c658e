//! Serializable projection of a game session

use super::{GameStatus, GuessRow, Statistics};
use crate::core::{Difficulty, Word};
use serde::{Deserialize, Serialize};

/// Current snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub secret_word: Word,
    pub difficulty: Difficulty,
    pub rows: Vec<GuessRow>,
    pub status: GameStatus,
    pub win_streak: u32,
    /// Letters typed into the unsubmitted row
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub statistics: Statistics,
}
