//! Detection of newly completed lines.

use super::board::Board;
use super::line::{Line, generate_lines};
use super::registry::ScoredRegistry;
use super::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A line credited to the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct ScoredLine {
    line: Line,
    player: Player,
}

impl ScoredLine {
    /// The completed line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Player holding all three cells.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for ScoredLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} for {}", self.line, self.player)
    }
}

/// Finds lines completed since the last evaluation.
///
/// Holds the line templates for one board size. It keeps no score
/// state; the registry passed to [`LineEvaluator::find_new_lines`]
/// remembers what has been credited.
#[derive(Debug, Clone)]
pub struct LineEvaluator {
    size: usize,
    lines: Vec<Line>,
}

impl LineEvaluator {
    /// Generates the line templates for a `size × size` board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let lines = generate_lines(size);
        debug!(size, lines = lines.len(), "Line templates generated");
        Self { size, lines }
    }

    /// Board size the templates were generated for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every line template, in evaluation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line templates passing through `index`.
    pub fn lines_through(&self, index: usize) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.contains(index))
    }

    /// Returns lines fully held by one player that are not yet in
    /// `registry`, in template order, and records each of them there.
    #[instrument(skip_all, fields(size = self.size, scored = registry.len()))]
    pub fn find_new_lines(&self, board: &Board, registry: &mut ScoredRegistry) -> Vec<ScoredLine> {
        debug_assert_eq!(board.size(), self.size, "board does not match evaluator size");

        let mut found = Vec::new();
        for line in &self.lines {
            let Some(player) = line.owner(board) else {
                continue;
            };
            if registry.insert(*line) {
                debug!(%line, %player, "Line completed");
                found.push(ScoredLine::new(*line, player));
            }
        }
        found
    }
}
