//! N×N board rendering with scored lines drawn across their cells.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_triples::{Cell, Direction as LineDirection, Line as ScoringLine, Player, Session};

/// Terminal columns per cell.
const CELL_WIDTH: u16 = 3;

/// Drawn on cells crossed by scored lines running in different directions.
const CROSSING_GLYPH: char = '*';

/// Colour used for a player's marks.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

/// Stroke used to draw a line running in `direction`.
pub fn direction_glyph(direction: LineDirection) -> char {
    match direction {
        LineDirection::Horizontal => '─',
        LineDirection::Vertical => '│',
        LineDirection::DiagonalDownRight => '╲',
        LineDirection::DiagonalDownLeft => '╱',
    }
}

/// Short description of a line as 1-based `(row,col)` endpoints.
pub fn line_label(line: &ScoringLine, size: usize) -> String {
    match line.endpoint_coordinates(size) {
        Some(((r1, c1), (r2, c2))) => format!(
            "{} ({},{})→({},{})",
            direction_glyph(line.direction()),
            r1 + 1,
            c1 + 1,
            r2 + 1,
            c2 + 1
        ),
        None => line.to_string(),
    }
}

/// Stroke for a cell, if any scored line passes through it.
fn stroke_through(session: &Session, index: usize) -> Option<char> {
    let mut directions = session.scored_lines_through(index).map(ScoringLine::direction);
    let first = directions.next()?;
    if directions.all(|direction| direction == first) {
        Some(direction_glyph(first))
    } else {
        Some(CROSSING_GLYPH)
    }
}

/// Renders the board, highlighting the cursor and drawing every scored line.
///
/// Cells on a scored line are shaded in the owner's colour and flanked by
/// the stroke for the line's direction.
pub fn render_board(frame: &mut Frame, area: Rect, session: &Session, cursor: Option<usize>) {
    let board = session.board();
    let size = board.size();

    let rows: Vec<Line> = (0..size)
        .map(|row| {
            let spans: Vec<Span> = (0..size)
                .map(|col| {
                    let index = row * size + col;
                    let cell = board.get(index).unwrap_or_default();
                    let (mark, mut style) = match cell {
                        Cell::Empty => ('·', Style::default().fg(Color::DarkGray)),
                        Cell::Occupied(player) => (
                            match player {
                                Player::X => 'X',
                                Player::O => 'O',
                            },
                            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
                        ),
                    };
                    let mut pad = ' ';
                    if let Some(player) = cell.player()
                        && let Some(stroke) = stroke_through(session, index)
                    {
                        pad = stroke;
                        style = style.fg(Color::White).bg(player_color(player));
                    }
                    if cursor == Some(index) {
                        style = style.bg(Color::White).fg(Color::Black);
                    }
                    Span::styled(format!("{pad}{mark}{pad}"), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let width = (size as u16).saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = (size as u16).saturating_add(2);
    let board_area = center_rect(area, width, height);

    let paragraph = Paragraph::new(rows)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, board_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    /// Renders into an area exactly the size of the board's frame.
    fn draw(session: &Session, cursor: Option<usize>) -> Buffer {
        let size = session.board_size() as u16;
        let backend = TestBackend::new(size * CELL_WIDTH + 2, size + 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), session, cursor))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer position of the mark in cell (`row`, `col`).
    fn mark_at(row: u16, col: u16) -> (u16, u16) {
        (1 + col * CELL_WIDTH + 1, 1 + row)
    }

    fn play(size: usize, moves: &[usize]) -> Session {
        let mut session = Session::new(size, "Ada", "Grace");
        for &index in moves {
            session.play(index);
        }
        session
    }

    #[test]
    fn test_renders_marks_in_place() {
        let buffer = draw(&play(3, &[0, 4]), None);
        assert_eq!(buffer[mark_at(0, 0)].symbol(), "X");
        assert_eq!(buffer[mark_at(1, 1)].symbol(), "O");
        assert_eq!(buffer[mark_at(2, 2)].symbol(), "·");
    }

    #[test]
    fn test_scored_line_is_shaded_in_owner_colour() {
        // X scores the top row; O holds 3 and 4 without a line.
        let buffer = draw(&play(3, &[0, 3, 1, 4, 2]), None);

        for col in 0..3 {
            let cell = &buffer[mark_at(0, col)];
            assert_eq!(cell.symbol(), "X");
            assert_eq!(cell.bg, player_color(Player::X));
        }
        let (x, y) = mark_at(0, 0);
        assert_eq!(buffer[(x - 1, y)].symbol(), "─");
        assert_eq!(buffer[(x + 1, y)].symbol(), "─");

        let off_line = &buffer[mark_at(1, 0)];
        assert_eq!(off_line.symbol(), "O");
        assert_ne!(off_line.bg, player_color(Player::O));
        let (x, y) = mark_at(1, 0);
        assert_eq!(buffer[(x - 1, y)].symbol(), " ");
    }

    #[test]
    fn test_diagonal_and_crossing_strokes() {
        // X: 0, 4, 8 (↘) then 2, 6 (↙) crossing at the centre.
        let session = play(3, &[0, 1, 4, 3, 8, 5, 2, 7, 6]);
        assert_eq!(session.tally().x(), 2);
        let buffer = draw(&session, None);

        let (x, y) = mark_at(0, 0);
        assert_eq!(buffer[(x - 1, y)].symbol(), "╲");
        let (x, y) = mark_at(0, 2);
        assert_eq!(buffer[(x - 1, y)].symbol(), "╱");
        let (x, y) = mark_at(1, 1);
        assert_eq!(buffer[(x - 1, y)].symbol(), "*");
        assert_eq!(buffer[(x, y)].bg, player_color(Player::X));
    }

    #[test]
    fn test_cursor_overrides_shading() {
        let buffer = draw(&play(3, &[0, 3, 1, 4, 2]), Some(1));
        assert_eq!(buffer[mark_at(0, 1)].bg, Color::White);
    }

    #[test]
    fn test_line_label_uses_one_based_endpoints() {
        let line = ScoringLine::new([2, 5, 8], LineDirection::DiagonalDownLeft);
        assert_eq!(line_label(&line, 3), "╱ (1,3)→(3,1)");
        let row = ScoringLine::new([5, 6, 7], LineDirection::Horizontal);
        assert_eq!(line_label(&row, 4), "─ (2,2)→(2,4)");
    }

    #[test]
    fn test_large_board_in_small_area() {
        let session = Session::new(32, "Ada", "Grace");
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), &session, Some(0)))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        assert_eq!(buffer[mark_at(0, 0)].bg, Color::White);
    }
}
