//! Thread-safe session handle
//!
//! Transitions take `&mut GameSession`, so they are already serialized for a
//! single owner. `SharedSession` lets several input sources (a key reader and
//! a timer, for example) drive one session; the mutex applies each event as a
//! whole before the next one is looked at.

use super::{Event, GameError, GameSession, Notification};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedSession<'a> {
    inner: Arc<Mutex<GameSession<'a>>>,
}

impl<'a> SharedSession<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Apply one event under the session lock
    ///
    /// # Errors
    /// Returns the `GameError` of the rejected transition.
    pub fn handle(&self, event: Event) -> Result<Vec<Notification>, GameError> {
        self.inner.lock().handle(event)
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession<'a>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
