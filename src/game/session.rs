//! Game session state machine
//!
//! A session owns one game at a time: the secret, the submitted rows, the
//! row being typed, the keyboard status and the win streak. Every transition
//! either applies completely or returns a `GameError` and leaves the session
//! untouched. Successful transitions are saved through the injected
//! `PersistenceGateway`; a failing store only produces a
//! `Notification::PersistenceDegraded`.

use super::{Event, GameError, GuessRow, Notification, SNAPSHOT_VERSION, Snapshot, Statistics};
use crate::core::{Difficulty, KeyboardStatus, WORD_LENGTH, Word};
use crate::persistence::PersistenceGateway;
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Number of guesses allowed per game
pub const MAX_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

pub struct GameSession<'a> {
    words: &'a dyn WordSource,
    store: &'a dyn PersistenceGateway,
    secret: Word,
    difficulty: Difficulty,
    rows: Vec<GuessRow>,
    buffer: String,
    status: GameStatus,
    win_streak: u32,
    keyboard: KeyboardStatus,
    statistics: Statistics,
    degraded: bool,
}

impl<'a> GameSession<'a> {
    /// Start a fresh in-memory game; nothing is saved until the first transition
    #[must_use]
    pub fn new(
        words: &'a dyn WordSource,
        store: &'a dyn PersistenceGateway,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            words,
            store,
            secret: words.pick_secret(difficulty),
            difficulty,
            rows: Vec::with_capacity(MAX_ROWS),
            buffer: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
            win_streak: 0,
            keyboard: KeyboardStatus::new(),
            statistics: Statistics::default(),
            degraded: false,
        }
    }

    /// Resume the last saved game, or start a fresh easy game
    ///
    /// Missing, corrupt or inconsistent snapshots start a fresh game. A store
    /// that cannot be read also starts fresh, in degraded mode.
    pub fn restore(
        words: &'a dyn WordSource,
        store: &'a dyn PersistenceGateway,
    ) -> (Self, Vec<Notification>) {
        match store.load() {
            Ok(Some(snapshot)) => {
                if let Some(session) = Self::from_snapshot(words, store, snapshot) {
                    info!(
                        difficulty = %session.difficulty,
                        rows = session.rows.len(),
                        streak = session.win_streak,
                        "restored saved game"
                    );
                    return (session, Vec::new());
                }
                warn!("saved game is inconsistent, starting fresh");
            }
            Ok(None) => debug!("no saved game"),
            Err(e) => {
                warn!(error = %e, "could not load saved game");
                let mut session = Self::new(words, store, Difficulty::default());
                session.degraded = true;
                let notes = vec![
                    Notification::NewGame {
                        difficulty: session.difficulty,
                    },
                    Notification::PersistenceDegraded {
                        reason: e.to_string(),
                    },
                ];
                return (session, notes);
            }
        }

        let mut session = Self::new(words, store, Difficulty::default());
        let mut notes = vec![Notification::NewGame {
            difficulty: session.difficulty,
        }];
        session.persist(&mut notes);
        (session, notes)
    }

    /// Rebuild a session from a snapshot, rejecting inconsistent ones
    fn from_snapshot(
        words: &'a dyn WordSource,
        store: &'a dyn PersistenceGateway,
        snapshot: Snapshot,
    ) -> Option<Self> {
        if snapshot.version != SNAPSHOT_VERSION || snapshot.rows.len() > MAX_ROWS {
            return None;
        }
        if !snapshot
            .rows
            .iter()
            .all(|row| row.matches_secret(&snapshot.secret_word))
        {
            return None;
        }

        let solved_at = snapshot.rows.iter().position(GuessRow::is_solved);
        let expected = match solved_at {
            Some(i) if i + 1 == snapshot.rows.len() => GameStatus::Won,
            Some(_) => return None,
            None if snapshot.rows.len() == MAX_ROWS => GameStatus::Lost,
            None => GameStatus::InProgress,
        };
        if snapshot.status != expected {
            return None;
        }

        let pending_ok = snapshot.pending.len() <= WORD_LENGTH
            && snapshot.pending.bytes().all(|b| b.is_ascii_uppercase())
            && (snapshot.status == GameStatus::InProgress || snapshot.pending.is_empty());
        if !pending_ok {
            return None;
        }

        let mut keyboard = KeyboardStatus::new();
        for row in &snapshot.rows {
            keyboard.record_guess(row.word(), row.feedback());
        }

        Some(Self {
            words,
            store,
            secret: snapshot.secret_word,
            difficulty: snapshot.difficulty,
            rows: snapshot.rows,
            buffer: snapshot.pending,
            status: snapshot.status,
            win_streak: snapshot.win_streak,
            keyboard,
            statistics: snapshot.statistics,
            degraded: false,
        })
    }

    /// Dispatch one input event
    ///
    /// # Errors
    /// Returns the `GameError` of the underlying transition.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Notification>, GameError> {
        match event {
            Event::Letter(ch) => self.input_letter(ch),
            Event::Backspace => self.backspace(),
            Event::Submit => self.submit_guess(),
            Event::NewGame(difficulty) => Ok(self.new_game(difficulty)),
        }
    }

    /// Append a letter to the current row
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `InvalidLetter` for anything but `A`-`Z` (either case)
    /// - `RowFull` when the row already has five letters
    pub fn input_letter(&mut self, ch: char) -> Result<Vec<Notification>, GameError> {
        self.ensure_in_progress()?;
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(ch));
        }
        if self.buffer.len() >= WORD_LENGTH {
            return Err(GameError::RowFull);
        }

        self.buffer.push(ch.to_ascii_uppercase());
        let mut notes = vec![self.buffer_changed()];
        self.persist(&mut notes);
        Ok(notes)
    }

    /// Remove the last letter of the current row, if any
    ///
    /// # Errors
    /// Returns `GameAlreadyOver` once the game is won or lost.
    pub fn backspace(&mut self) -> Result<Vec<Notification>, GameError> {
        self.ensure_in_progress()?;
        if self.buffer.pop().is_none() {
            return Ok(Vec::new());
        }

        let mut notes = vec![self.buffer_changed()];
        self.persist(&mut notes);
        Ok(notes)
    }

    /// Submit the current row as a guess
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `NotEnoughLetters` if the row has fewer than five letters
    /// - `GuessNotInDictionary` if the word source rejects the guess; the
    ///   typed letters stay in place for correction
    pub fn submit_guess(&mut self) -> Result<Vec<Notification>, GameError> {
        self.ensure_in_progress()?;
        if self.buffer.len() < WORD_LENGTH {
            return Err(GameError::NotEnoughLetters);
        }
        let guess = Word::new(self.buffer.as_str()).map_err(|_| GameError::NotEnoughLetters)?;
        if !self.words.is_valid_guess(&guess) {
            debug!(guess = %guess, "guess not in word list");
            return Err(GameError::GuessNotInDictionary(guess));
        }

        let row_index = self.rows.len();
        let row = GuessRow::new(guess, &self.secret);
        let feedback = *row.feedback();
        let changed = self.keyboard.record_guess(row.word(), &feedback);
        debug!(row = row_index, guess = %row.word(), feedback = %feedback, "guess classified");
        self.rows.push(row);
        self.buffer.clear();

        let mut notes = Vec::with_capacity(changed.len() + 2);
        notes.push(Notification::RowClassified {
            row: row_index,
            feedback,
        });
        notes.extend(changed.into_iter().map(|(letter, classification)| {
            Notification::KeyboardUpdated {
                letter: char::from(letter),
                classification,
            }
        }));

        if feedback.is_solved() {
            self.status = GameStatus::Won;
            self.win_streak = self.win_streak.saturating_add(1);
            self.statistics.record_win(self.rows.len(), self.win_streak);
            info!(rows = self.rows.len(), streak = self.win_streak, "game won");
            notes.push(Notification::Won {
                rows_used: self.rows.len(),
                streak: self.win_streak,
            });
        } else if self.rows.len() == MAX_ROWS {
            self.status = GameStatus::Lost;
            self.win_streak = 0;
            self.statistics.record_loss();
            info!(secret = %self.secret, "game lost");
            notes.push(Notification::Lost {
                secret: self.secret.clone(),
            });
        }

        self.persist(&mut notes);
        Ok(notes)
    }

    /// Throw away the current game and draw a new secret
    ///
    /// `None` moves to the next difficulty (Easy → Medium → Hard → Easy);
    /// `Some` selects one explicitly. The win streak carries over.
    pub fn new_game(&mut self, difficulty: Option<Difficulty>) -> Vec<Notification> {
        let difficulty = difficulty.unwrap_or_else(|| self.difficulty.next());

        self.secret = self.words.pick_secret(difficulty);
        self.difficulty = difficulty;
        self.rows.clear();
        self.buffer.clear();
        self.keyboard.clear();
        self.status = GameStatus::InProgress;
        info!(%difficulty, streak = self.win_streak, "new game");

        let mut notes = vec![Notification::NewGame { difficulty }];
        self.persist(&mut notes);
        notes
    }

    /// Serializable projection of the session
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            secret_word: self.secret.clone(),
            difficulty: self.difficulty,
            rows: self.rows.clone(),
            status: self.status,
            win_streak: self.win_streak,
            pending: self.buffer.clone(),
            statistics: self.statistics.clone(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Index of the row being typed (equals the number of submitted rows)
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    /// Uppercase letters typed into the current row
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Whether the last save failed
    #[must_use]
    pub const fn is_persistence_degraded(&self) -> bool {
        self.degraded
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(GameError::GameAlreadyOver)
        }
    }

    fn buffer_changed(&self) -> Notification {
        Notification::BufferChanged {
            row: self.rows.len(),
            letters: self.buffer.clone(),
        }
    }

    /// Save the session; a failure flips to degraded mode and is reported once
    fn persist(&mut self, notes: &mut Vec<Notification>) {
        match self.store.save(&self.snapshot()) {
            Ok(()) => {
                if self.degraded {
                    info!("saving works again");
                    self.degraded = false;
                }
            }
            Err(e) => {
                warn!(error = %e, "could not save game, continuing in memory");
                if !self.degraded {
                    self.degraded = true;
                    notes.push(Notification::PersistenceDegraded {
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}
