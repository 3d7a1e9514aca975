//! Per-player line counts.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Running count of distinct scored lines for each player.
///
/// Counts only ever go up within a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    x: u32,
    o: u32,
}

impl Tally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits one line to `player`.
    pub fn record(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Lines scored by `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Lines scored by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Lines scored by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Lines scored by both players together.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} O", self.x, self.o)
    }
}
