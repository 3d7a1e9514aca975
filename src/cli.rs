//! Command-line interface for triples.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Triples - score every three-in-a-row on an N×N board
#[derive(Parser, Debug)]
#[command(name = "triples")]
#[command(about = "Line-scoring tic-tac-toe on N×N boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size (rows and columns)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Name for player X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for player O
    #[arg(long)]
    pub player_o: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (skips the board menu if --size is given)
    Play {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play a list of cell indices and print the result
    Replay {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices in play order (row-major, starting at 0)
        moves: Vec<usize>,
    },
}
