//! Triples - line-scoring tic-tac-toe in the terminal
//!
//! Every three-in-a-row on an N×N board scores a line; the board fills
//! up and whoever scored more lines wins. Game logic lives in the
//! `strictly_triples` crate; this crate adds configuration, the
//! terminal lobby, and headless replays.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Lobby**: multi-screen TUI (names, board size, game, result)
//! - **Replay**: plays a move list without a terminal
//!
//! # Example
//!
//! ```
//! use triples::{GameConfig, replay};
//!
//! let config = GameConfig::default();
//! let summary = replay(&config, &[0, 3, 1, 4, 2]);
//! assert_eq!(summary.tally().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod lobby;
mod logging;
mod replay;

// Crate-level exports - Command line
pub use cli::{Cli, Command, GameArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};

// Crate-level exports - Lobby
pub use lobby::{LobbyController, Screen, ScreenTransition, run_lobby};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging, with_bootstrap_logging};

// Crate-level exports - Replay
pub use replay::{MoveRecord, ReplaySummary, replay};

// Crate-level exports - Game types
pub use strictly_triples::{
    Board, Cell, Line, MoveError, MoveResult, Outcome, Player, ScoredLine, Session, Tally,
};
