//! Triples - Unified CLI
//!
//! Line-scoring tic-tac-toe with a terminal UI and headless replays.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use triples::{Cli, Command, GameArgs, GameConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(game).await,
        Command::Replay { game, json, moves } => run_replay(game, json, moves),
    }
}

/// Resolves the config file and command-line overrides.
fn resolve_config(game: GameArgs) -> Result<GameConfig> {
    let config = GameConfig::load(game.config.as_deref())?
        .with_overrides(game.size, game.player_x, game.player_o)?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Run the terminal UI
async fn run_play(game: GameArgs) -> Result<()> {
    let fixed_board_size = game.size;
    // The log file comes from the config, so loading it logs to stderr.
    let config = triples::with_bootstrap_logging(|| resolve_config(game))?;

    // Setup logging to file to avoid interfering with TUI
    triples::init_file_logging(config.log_file())?;
    info!(?fixed_board_size, log_file = %config.log_file().display(), "Starting play mode");
    debug!(?config, "Playing with configuration");

    triples::run_lobby(config, fixed_board_size).await
}

/// Replay moves and print the summary
fn run_replay(game: GameArgs, json: bool, moves: Vec<usize>) -> Result<()> {
    triples::init_stderr_logging();
    let config = resolve_config(game)?;
    info!(moves = moves.len(), "Starting replay");

    let summary = triples::replay(&config, &moves);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}
