//! Vocabulary for secrets and guesses
//!
//! Tiered word lists are compiled into the binary; `TieredWordSource` turns
//! them into the `WordSource` the game session draws from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{
    ALLOWED, ALLOWED_COUNT, EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT,
};
pub use source::{TieredWordSource, WordSource, WordSourceError};
