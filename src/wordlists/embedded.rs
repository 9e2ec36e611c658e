//! Embedded word lists
//!
//! Vocabulary tiers compiled into the binary by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
