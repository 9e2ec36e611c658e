//! TUI application state and logic

use crate::core::Difficulty;
use crate::game::{Event as GameEvent, GameSession, Notification};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Number of messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(GameEvent),
    Quit,
}

impl Action {
    /// Map a key press to an action; `None` for keys with no binding
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Esc => Self::Quit,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Self::Game(GameEvent::Letter(c)),
            KeyCode::Backspace => Self::Game(GameEvent::Backspace),
            KeyCode::Enter => Self::Game(GameEvent::Submit),
            KeyCode::Tab => Self::Game(GameEvent::NewGame(None)),
            KeyCode::F(1) => Self::Game(GameEvent::NewGame(Some(Difficulty::Easy))),
            KeyCode::F(2) => Self::Game(GameEvent::NewGame(Some(Difficulty::Medium))),
            KeyCode::F(3) => Self::Game(GameEvent::NewGame(Some(Difficulty::Hard))),
            _ => return None,
        };
        Some(action)
    }
}

impl<'a> App<'a> {
    /// Wrap a session, showing the notifications produced while restoring it
    #[must_use]
    pub fn new(session: GameSession<'a>, startup: &[Notification]) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a word and press Enter. Tab: new game, F1-F3: pick difficulty, Esc: quit",
            MessageStyle::Info,
        );
        app.show_notifications(startup);
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match Action::from_key(key) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Game(event)) => self.apply(event),
            None => {}
        }
    }

    /// Feed one event to the session and log its outcome
    pub fn apply(&mut self, event: GameEvent) {
        match self.session.handle(event) {
            Ok(notes) => self.show_notifications(&notes),
            Err(e) => {
                debug!(?event, error = %e, "event rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn show_notifications(&mut self, notes: &[Notification]) {
        for note in notes {
            if let Some(text) = note.message() {
                let style = match note {
                    Notification::Won { .. } => MessageStyle::Success,
                    Notification::Lost { .. } | Notification::PersistenceDegraded { .. } => {
                        MessageStyle::Error
                    }
                    _ => MessageStyle::Info,
                };
                self.add_message(&text, style);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
