//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Classification, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, MAX_ROWS};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Grid and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, &app.session, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, &app.session, chunks[2]);
    render_status(f, &app.session, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile style for a letter status; `None` is an unjudged letter
fn tile_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: char, classification: Option<Classification>) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(classification))
}

fn grid_lines(session: &GameSession) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ROWS * 2);

    for index in 0..MAX_ROWS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(row) = session.rows().get(index) {
            for (letter, classification) in row.cells() {
                spans.push(tile(letter, Some(classification)));
                spans.push(Span::raw(" "));
            }
        } else {
            let typing =
                index == session.current_row() && session.status() == GameStatus::InProgress;
            let typed = if typing {
                session.buffer()
            } else {
                ""
            };
            for letter in typed.chars().chain(std::iter::repeat('_')).take(WORD_LENGTH) {
                let style = if letter == '_' {
                    Style::default().fg(Color::DarkGray)
                } else {
                    tile_style(None)
                };
                spans.push(Span::styled(format!(" {letter} "), style));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_grid(f: &mut Frame, session: &GameSession, area: Rect) {
    let title = match session.status() {
        GameStatus::InProgress => format!(" Row {}/{MAX_ROWS} ", session.current_row() + 1),
        GameStatus::Won => " Solved! ".to_string(),
        GameStatus::Lost => " Out of guesses ".to_string(),
    };

    let grid = Paragraph::new(grid_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let keyboard = session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        tile(char::from(letter), keyboard.status_of(letter)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, session: &GameSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Difficulty: {}", session.difficulty()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let streak = Paragraph::new(format!("Streak: {}", session.win_streak()))
        .alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let stats = session.statistics();
    let stats_text = if session.is_persistence_degraded() {
        format!("Games: {} | not saving", stats.played)
    } else {
        format!(
            "Games: {} | Win Rate: {:.0}%",
            stats.played,
            stats.win_rate()
        )
    };
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: New Game | F1-F3: Level")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
