//! Wordle Engine
//!
//! A Wordle-style puzzle engine: duplicate-aware guess evaluation, a game
//! session state machine with win streaks and difficulty tiers, and
//! snapshot persistence that survives a failing store.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::Difficulty;
//! use wordle_engine::game::{Event, GameSession, GameStatus};
//! use wordle_engine::persistence::{JsonGateway, MemoryStore};
//! use wordle_engine::wordlists::TieredWordSource;
//!
//! let words = TieredWordSource::embedded().unwrap().with_seed(1);
//! let store = JsonGateway::new(MemoryStore::new());
//! let mut session = GameSession::new(&words, &store, Difficulty::Easy);
//!
//! let secret = session.secret().text().to_string();
//! for ch in secret.chars() {
//!     session.handle(Event::Letter(ch)).unwrap();
//! }
//! session.handle(Event::Submit).unwrap();
//!
//! assert_eq!(session.status(), GameStatus::Won);
//! assert_eq!(session.win_streak(), 1);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Snapshot storage
pub mod persistence;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
