//! Wordle Engine - CLI
//!
//! Play in a TUI or line by line, check single guesses and inspect the saved
//! statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_engine::{
    commands::{check_guess, load_stats, reset_state, run_simple},
    config::{Config, DEFAULT_LOG_LEVEL, default_state_dir},
    game::GameSession,
    output::{print_check_result, print_stats_report},
    persistence::STORAGE_KEY,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle-style word puzzle with difficulty tiers and saved streaks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the saved game (default: ~/.wordle-engine)
    #[arg(long, global = true, env = "WORDLE_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Directory with custom easy.txt, medium.txt, hard.txt (and allowed.txt)
    #[arg(long, global = true, env = "WORDLE_WORDS_DIR")]
    words_dir: Option<PathBuf>,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'info' or 'wordle_engine=debug'
    #[arg(long, global = true, env = "WORDLE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Append logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Show the feedback for one guess against one secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Show saved statistics and streak
    Stats,

    /// Delete the saved game, streak and statistics
    Reset,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            state_dir: self.state_dir.clone().unwrap_or_else(default_state_dir),
            storage_key: STORAGE_KEY.to_string(),
            words_dir: self.words_dir.clone(),
            seed: self.seed,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

/// Install the global subscriber
///
/// Logs go to `--log-file` when given. Otherwise they go to stderr, except in
/// the TUI where stderr would draw over the screen.
fn init_logging(config: &Config, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None if tui => builder.with_writer(std::io::sink).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&config, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, secret } => run_check_command(&config, &guess, &secret),
        Commands::Stats => run_stats_command(&config),
        Commands::Reset => run_reset_command(&config),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let words = config.word_source()?;
    let store = config.gateway();
    let (session, startup) = GameSession::restore(&words, &store);
    run_tui(App::new(session, &startup))
}

fn run_simple_command(config: &Config) -> Result<()> {
    let words = config.word_source()?;
    let store = config.gateway();
    let (mut session, startup) = GameSession::restore(&words, &store);
    run_simple(&mut session, &startup)
}

fn run_check_command(config: &Config, guess: &str, secret: &str) -> Result<()> {
    let words = config.word_source()?;
    let result = check_guess(guess, secret, &words).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_stats_command(config: &Config) -> Result<()> {
    let store = config.gateway();
    match load_stats(&store).context("failed to read saved state")? {
        Some(report) => print_stats_report(&report),
        None => println!("No games played yet."),
    }
    Ok(())
}

fn run_reset_command(config: &Config) -> Result<()> {
    reset_state(&config.gateway()).context("failed to delete saved state")?;
    println!("Saved state removed from {}", config.state_dir.display());
    Ok(())
}
