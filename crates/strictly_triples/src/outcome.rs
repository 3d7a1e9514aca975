//! Final result of a game.

use super::tally::Tally;
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player scored more lines.
    Win {
        /// The winner.
        player: Player,
        /// Lines the winner scored.
        lines: u32,
    },
    /// Both players scored the same number of lines.
    Draw {
        /// Lines scored by X.
        x: u32,
        /// Lines scored by O.
        o: u32,
    },
}

impl Outcome {
    /// Decides the outcome from final tallies. More lines wins.
    pub fn decide(tally: &Tally) -> Self {
        match tally.x().cmp(&tally.o()) {
            Ordering::Greater => Outcome::Win {
                player: Player::X,
                lines: tally.x(),
            },
            Ordering::Less => Outcome::Win {
                player: Player::O,
                lines: tally.o(),
            },
            Ordering::Equal => Outcome::Draw {
                x: tally.x(),
                o: tally.o(),
            },
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw { .. } => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw { .. })
    }

    /// Announcement for the end-of-game screen.
    pub fn message(&self, player_x_name: &str, player_o_name: &str) -> String {
        match self {
            Outcome::Win { player, lines } => {
                let name = match player {
                    Player::X => player_x_name,
                    Player::O => player_o_name,
                };
                format!("{} Wins with {} line(s)! 🎉", name, lines)
            }
            Outcome::Draw { x, o } => format!("🤝 It's a Draw! ({} - {})", x, o),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, lines } => write!(f, "Player {} wins with {} line(s)", player, lines),
            Outcome::Draw { x, o } => write!(f, "Draw ({} - {})", x, o),
        }
    }
}
