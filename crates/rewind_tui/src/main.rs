//! Rewind - tic-tac-toe with time travel
//!
//! Terminal front-end and replay printer.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::{Game, GameSession, Position, SortOrder};
use rewind_tui::cli::{Cli, Command, cell_indices};
use rewind_tui::terminal::TerminalGuard;
use rewind_tui::{App, TuiConfig, input, replay, ui};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            descending,
            moves,
        } => run_play(&config, descending, &moves),
        Command::Replay {
            moves,
            jump,
            descending,
        } => run_replay(&moves, jump, descending),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so output does not corrupt the alternate screen.
fn init_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}

fn initial_session(moves: &[Position], sort_order: SortOrder) -> Result<GameSession> {
    let game = Game::replay(&cell_indices(moves)).context("Failed to replay initial moves")?;
    Ok(GameSession::with_game(game, sort_order))
}

fn sort_order_for(descending: bool, fallback: SortOrder) -> SortOrder {
    if descending {
        SortOrder::Descending
    } else {
        fallback
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path, descending: bool, moves: &[Position]) -> Result<()> {
    let config = TuiConfig::load_or_default(config_path)?;
    let sort_order = sort_order_for(descending, *config.sort_order());
    let config = config.with_sort_order(sort_order);
    init_file_tracing(config.log_file())?;

    info!(config = %config_path.display(), "Starting rewind TUI");
    let session = initial_session(moves, *config.sort_order())?;
    let mut app = App::new(session);

    let res = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        run_app(&mut terminal, &mut app)
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.session().game().len() - 1, "TUI exited");
    res
}

/// Draw, wait for one key, apply it. Repeats until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = input::action_for(key)
        {
            debug!(?action, "Key mapped to action");
            app.handle(action);
        }
    }
    Ok(())
}

/// Print a replayed game to stdout
fn run_replay(moves: &[Position], jump: Option<usize>, descending: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();

    let mut session = initial_session(moves, sort_order_for(descending, SortOrder::Ascending))?;
    if let Some(index) = jump {
        let mut game = session.game().clone();
        game.jump_to(index).context("Invalid --jump")?;
        session = GameSession::with_game(game, session.sort_order());
    }

    print!("{}", replay::render_text(&session));
    Ok(())
}
