//! Cursor movement for keyboard navigation on an N×N board.

use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: usize, key: KeyCode, size: usize) -> usize {
    if size == 0 {
        return cursor;
    }
    let (row, col) = (cursor / size, cursor % size);

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(size - 1)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(size - 1), col),
        _ => (row, col),
    };

    row * size + col
}
