//! Simple line-based play mode
//!
//! Text-based game without the TUI: each line is either a whole guess or a
//! `:`-prefixed command.

use crate::core::Difficulty;
use crate::game::{Event, GameError, GameSession, GameStatus, Notification};
use crate::output::{print_board, print_error, print_notifications};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Guess(String),
    NewGame(Option<Difficulty>),
    Help,
    Quit,
}

impl SimpleCommand {
    /// Parse a line of input; `None` for blank lines
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or difficulties.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Some(Self::Guess(line.to_string())));
        };

        let mut parts = command.split_whitespace();
        match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("new" | "n") => {
                let difficulty = parts.next().map(str::parse::<Difficulty>).transpose()?;
                Ok(Some(Self::NewGame(difficulty)))
            }
            Some("help" | "h" | "?") => Ok(Some(Self::Help)),
            Some("quit" | "q" | "exit") => Ok(Some(Self::Quit)),
            _ => Err(format!("Unknown command: {line}")),
        }
    }
}

/// Type `word` into the current row and submit it
///
/// Letters left over from an earlier session are cleared first. On any
/// rejection the row is emptied again so the next line starts clean.
///
/// # Errors
///
/// Returns the first `GameError` raised while typing or submitting.
pub fn play_guess(session: &mut GameSession, word: &str) -> Result<Vec<Notification>, GameError> {
    clear_row(session)?;

    let typed = word
        .chars()
        .try_for_each(|ch| session.handle(Event::Letter(ch)).map(drop));
    let result = typed.and_then(|()| session.handle(Event::Submit));

    if result.is_err() {
        clear_row(session)?;
    }
    result
}

fn clear_row(session: &mut GameSession) -> Result<(), GameError> {
    while !session.buffer().is_empty() {
        session.handle(Event::Backspace)?;
    }
    Ok(())
}

fn print_help() {
    println!("Type a five-letter word and press Enter to guess.");
    println!("Commands: ':new [easy|medium|hard]' new game, ':help' this text, ':quit' exit\n");
}

/// Run the simple line-based mode on stdin
///
/// # Errors
///
/// Returns an error if stdin or stdout fail.
pub fn run_simple(session: &mut GameSession, startup: &[Notification]) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();
    print_notifications(startup);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(session);
        print!(
            "[{} | streak {}] > ",
            session.difficulty(),
            session.win_streak()
        );
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match SimpleCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SimpleCommand::Quit)) => break,
            Ok(Some(SimpleCommand::Help)) => print_help(),
            Ok(Some(SimpleCommand::NewGame(difficulty))) => {
                print_notifications(&session.new_game(difficulty));
            }
            Ok(Some(SimpleCommand::Guess(word))) => match play_guess(session, &word) {
                Ok(notes) => {
                    print_notifications(&notes);
                    if session.status() != GameStatus::InProgress {
                        println!("Type ':new' to play again.");
                    }
                }
                Err(e) => print_error(&e),
            },
            Err(message) => println!("{message}"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
