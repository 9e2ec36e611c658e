//! Saved statistics and state reset commands

use crate::core::Difficulty;
use crate::game::{GameStatus, GuessRow, Statistics};
use crate::persistence::{JsonGateway, KeyValueStore, PersistenceError, PersistenceGateway};
use tracing::info;

/// What the saved state says about past and current play
pub struct StatsReport {
    pub statistics: Statistics,
    pub win_streak: u32,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub rows: Vec<GuessRow>,
}

impl StatsReport {
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        match self.status {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Read the saved statistics; `None` if nothing has been played yet
///
/// # Errors
///
/// Returns `PersistenceError` if the store cannot be read.
pub fn load_stats(
    gateway: &dyn PersistenceGateway,
) -> Result<Option<StatsReport>, PersistenceError> {
    Ok(gateway.load()?.map(|snapshot| StatsReport {
        statistics: snapshot.statistics,
        win_streak: snapshot.win_streak,
        difficulty: snapshot.difficulty,
        status: snapshot.status,
        rows: snapshot.rows,
    }))
}

/// Delete the saved game, streak and statistics
///
/// # Errors
///
/// Returns `PersistenceError` if the store cannot be written.
pub fn reset_state<S: KeyValueStore>(gateway: &JsonGateway<S>) -> Result<(), PersistenceError> {
    gateway.clear()?;
    info!(key = gateway.key(), "saved state removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;
    use crate::game::testing::ScriptedWords;
    use crate::persistence::MemoryStore;

    #[test]
    fn stats_reflect_saved_session() {
        let words = ScriptedWords::new(&["above"]);
        let gateway = JsonGateway::new(MemoryStore::new());
        assert!(load_stats(&gateway).unwrap().is_none());

        let mut session = GameSession::new(&words, &gateway, Difficulty::Easy);
        for ch in "above".chars() {
            session.input_letter(ch).unwrap();
        }
        session.submit_guess().unwrap();

        let report = load_stats(&gateway).unwrap().unwrap();
        assert_eq!(report.win_streak, 1);
        assert_eq!(report.statistics.won, 1);
        assert_eq!(report.status_label(), "won");
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn reset_removes_saved_state() {
        let words = ScriptedWords::new(&["above"]);
        let gateway = JsonGateway::new(MemoryStore::new());
        let mut session = GameSession::new(&words, &gateway, Difficulty::Easy);
        session.new_game(None);
        assert!(gateway.load().unwrap().is_some());

        reset_state(&gateway).unwrap();
        assert!(gateway.load().unwrap().is_none());
        // Resetting twice is harmless
        reset_state(&gateway).unwrap();
    }
}
