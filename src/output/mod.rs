//! Terminal output formatting
//!
//! Coloured rendering of the board, notifications and statistics for the
//! line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_error, print_notifications, print_stats_report,
};
