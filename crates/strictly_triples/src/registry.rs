//! Registry of lines already credited to a player.

use super::line::Line;
use std::collections::HashSet;
use tracing::trace;

/// Set of lines that have been scored this game.
///
/// Deduplication is per line, not per cell: a cell may sit on several
/// distinct lines and each of them can still score once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoredRegistry {
    lines: HashSet<Line>,
}

impl ScoredRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `line` has already been scored.
    pub fn contains(&self, line: &Line) -> bool {
        self.lines.contains(line)
    }

    /// Records `line` as scored. Returns false if it already was.
    pub fn insert(&mut self, line: Line) -> bool {
        let inserted = self.lines.insert(line);
        trace!(%line, inserted, "Registry insert");
        inserted
    }

    /// Number of scored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing has been scored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Scored lines in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}
