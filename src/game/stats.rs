//! Lifetime play statistics

use super::MAX_ROWS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub max_streak: u32,
    /// Wins by number of rows used; index 0 is a first-row win
    pub guess_distribution: [u32; MAX_ROWS],
}

impl Statistics {
    pub(crate) fn record_win(&mut self, rows_used: usize, streak: u32) {
        self.played += 1;
        self.won += 1;
        self.max_streak = self.max_streak.max(streak);
        if let Some(slot) = rows_used
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    pub(crate) fn record_loss(&mut self) {
        self.played += 1;
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_and_losses_are_counted() {
        let mut stats = Statistics::default();
        stats.record_win(3, 1);
        stats.record_win(1, 2);
        stats.record_loss();

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn win_rate_handles_no_games() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);

        let mut stats = Statistics::default();
        stats.record_win(2, 1);
        stats.record_loss();
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
