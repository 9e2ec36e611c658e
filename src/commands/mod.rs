//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_guess};
pub use simple::{SimpleCommand, play_guess, run_simple};
pub use stats::{StatsReport, load_stats, reset_state};
