//! Terminal presentation layer.
//!
//! Renders the latest session snapshot and forwards key presses to the game
//! as intents. Holds no game state of its own.

mod heat;
mod keymap;
mod view;

pub use heat::{heat_bar, heat_color, heat_glyph};
pub use keymap::{Command, HELP, command_for};
pub use view::{controls_line, draw, record_line, status_lines};

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use semantic_guess_core::{Game, Intent, Oracle};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::llm_client::LlmClient;
use crate::oracle::LlmOracle;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the game in the terminal until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    init_file_tracing(config.log_file())?;
    info!("Starting Semantic Guess TUI");

    let llm = LlmClient::new(config.create_llm_config()?);
    let oracle = LlmOracle::new(llm)
        .with_timeout(config.oracle_timeout())
        .with_word_temperature(*config.word_temperature());
    let mut game = Game::new(Arc::new(oracle), *config.language());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Semantic Guess TUI exited");
    res
}

/// Routes tracing output to a file so it never corrupts the screen.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Event loop: apply finished oracle calls, render, handle one key.
#[instrument(skip_all)]
async fn run_game_loop<O: Oracle + 'static>(
    terminal: &mut CrosstermTerminal,
    game: &mut Game<O>,
) -> Result<()> {
    let snapshots = game.subscribe();
    game.dispatch(Intent::StartRound);

    loop {
        let applied = game.drain_outcomes();
        if applied > 0 {
            debug!(applied, "Applied oracle completions");
        }

        let session = snapshots.borrow().clone();
        terminal.draw(|f| draw(f, &session))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match command_for(key, &session) {
                Some(Command::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(Command::Dispatch(intent)) => game.dispatch(intent),
                None => {}
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
