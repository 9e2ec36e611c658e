//! Display functions for game output

use super::formatters::{colored_row, distribution_bars, emoji_grid, keyboard_lines, pending_row};
use crate::commands::{CheckResult, StatsReport};
use crate::game::{GameError, GameSession, GameStatus, Notification};
use colored::Colorize;

/// Print the grid so far and the keyboard
pub fn print_board(session: &GameSession) {
    println!("\n{}", "─".repeat(30).cyan());
    for row in session.rows() {
        println!("  {}", colored_row(row));
    }
    if session.status() == GameStatus::InProgress {
        println!("  {}", pending_row(session.buffer()));
    }
    println!("{}", "─".repeat(30).cyan());
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the messages carried by a transition's notifications
pub fn print_notifications(notes: &[Notification]) {
    for note in notes {
        let Some(message) = note.message() else {
            continue;
        };
        match note {
            Notification::Won { .. } => println!("{}", format!("🎉 {message}").green().bold()),
            Notification::Lost { .. } => println!("{}", message.red().bold()),
            Notification::PersistenceDegraded { .. } => println!("{}", message.yellow()),
            _ => println!("{}", message.bright_cyan()),
        }
    }
}

pub fn print_error(error: &GameError) {
    println!("{}", format!("❌ {error}").red());
}

/// Print the feedback for one guess/secret pair
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{} vs {}: {}",
        result.guess.text().bright_yellow().bold(),
        result.secret.text().bright_yellow().bold(),
        result.feedback
    );
    if !result.in_dictionary {
        println!(
            "{}",
            format!("note: {} is not in the word list", result.guess).yellow()
        );
    }
}

/// Print lifetime statistics and the current game
pub fn print_stats_report(report: &StatsReport) {
    let stats = &report.statistics;

    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:      {}", stats.played);
    println!(
        "   Win rate:    {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:      {}", report.win_streak);
    println!("   Max streak:  {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for bar in distribution_bars(stats, 20) {
        println!("   {}", bar.green());
    }

    println!(
        "\nCurrent game: {} ({}), {} row(s) used",
        report.status_label(),
        report.difficulty,
        report.rows.len()
    );
    if report.status != GameStatus::InProgress && !report.rows.is_empty() {
        println!("{}", emoji_grid(&report.rows));
    }
}
