//! In-game screen: the board, tallies, and move input.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_triples::{MoveResult, Player, ScoredLine, Session, SessionStatus};
use tracing::{debug, info, instrument, warn};

use crate::GameConfig;
use crate::lobby::board_view::{line_label, player_color, render_board};
use crate::lobby::input::move_cursor;
use crate::lobby::screen::{Screen, ScreenTransition};

/// In-game screen owning the running session.
#[derive(Debug)]
pub struct InGameScreen {
    session: Session,
    cursor: usize,
    last_scored: Vec<ScoredLine>,
    error_message: Option<String>,
    finished_at: Option<Instant>,
    finish_delay: Duration,
}

impl InGameScreen {
    /// Creates the screen for a freshly started session.
    #[instrument(skip(session), fields(board_size = session.board_size()))]
    pub fn new(session: Session, finish_delay: Duration) -> Self {
        debug!("Initializing InGameScreen");
        let cursor = session.board().len() / 2;
        let finished_at = (!session.is_active()).then(Instant::now);
        Self {
            session,
            cursor,
            last_scored: Vec::new(),
            error_message: None,
            finished_at,
            finish_delay,
        }
    }

    /// The running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Hands the session back, e.g. to the result screen.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Plays the current player's mark under the cursor.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    fn play_at_cursor(&mut self) {
        let player = self.session.current_player();
        match self.session.play(self.cursor) {
            MoveResult::Rejected(err) => {
                warn!(error = %err, "Move rejected");
                self.error_message = Some(err.to_string());
            }
            MoveResult::Accepted {
                newly_scored_lines,
                board_full,
            } => {
                debug!(%player, scored = newly_scored_lines.len(), board_full, "Move accepted");
                self.error_message = None;
                self.last_scored = newly_scored_lines;
                if board_full {
                    info!(outcome = ?self.session.outcome(), "Game over");
                    self.finished_at = Some(Instant::now());
                }
            }
        }
    }

    fn status_line(&self) -> Line<'_> {
        if let Some(err) = &self.error_message {
            return Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red)));
        }
        if let SessionStatus::Finished(_) = self.session.status() {
            return Line::from(Span::styled(
                "Board full!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        let player = self.session.current_player();
        let mut spans = vec![Span::styled(
            format!("{}'s Turn ({})", self.session.player_name(player), player),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        )];
        if let Some((row, col)) = self.session.board().coordinates(self.cursor) {
            spans.push(Span::styled(
                format!("   row {}, col {}", row + 1, col + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let size = self.session.board_size();
        for scored in &self.last_scored {
            spans.push(Span::styled(
                format!(
                    "   {} scored {}",
                    self.session.player_name(scored.player()),
                    line_label(&scored.line(), size)
                ),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn tally_line(&self) -> Line<'_> {
        let tally = self.session.tally();
        let entry = |player: Player| {
            Span::styled(
                format!("{} ({}): {}", self.session.player_name(player), player, tally.get(player)),
                Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
            )
        };
        Line::from(vec![entry(Player::X), Span::raw("   |   "), entry(Player::O)])
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame, _config))]
    fn render(&self, frame: &mut Frame, _config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let size = self.session.board_size();
        let title = Paragraph::new(format!("Triples — {size} × {size}"))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let tally = Paragraph::new(self.tally_line())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Lines"));
        frame.render_widget(tally, chunks[1]);

        let cursor = self.session.is_active().then_some(self.cursor);
        render_board(frame, chunks[2], &self.session, cursor);

        let status = Paragraph::new(self.status_line())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);

        let help = Paragraph::new("Arrows: Move | Enter/Space: Play | r: Restart | Esc: Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, _config))]
    fn handle_key(&mut self, key: KeyEvent, _config: &GameConfig) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Esc => ScreenTransition::GoToNameEntry,
            // Once the board is full only quitting or leaving is allowed.
            _ if !self.session.is_active() => ScreenTransition::Stay,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_at_cursor();
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.restart();
                self.last_scored.clear();
                self.error_message = None;
                ScreenTransition::Stay
            }
            code => {
                self.cursor = move_cursor(self.cursor, code, self.session.board_size());
                ScreenTransition::Stay
            }
        }
    }

    fn tick(&mut self) -> ScreenTransition {
        match self.finished_at {
            Some(at) if at.elapsed() >= self.finish_delay => ScreenTransition::ShowResult,
            _ => ScreenTransition::Stay,
        }
    }
}
