//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, run_tui};
