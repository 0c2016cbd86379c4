//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Outcome, Position, Timeline};
use tracing::debug;

use crate::input;

/// Main application state.
///
/// Owns the game timeline, the board cursor, and two pieces of pure
/// display state: the history sort order and a transient notice for
/// rejected input. Everything shown on screen is recomputed from the
/// timeline on every draw.
pub struct App {
    timeline: Timeline,
    cursor: Position,
    ascending: bool,
    notice: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(ascending: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            ascending,
            notice: None,
        }
    }

    /// The game timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the history list shows oldest entries first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Status line, derived from the displayed snapshot.
    pub fn status(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.timeline.outcome() {
            Outcome::Winner { player, .. } => format!("Winner: {}", player),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.timeline.to_move()),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Char('[') => self.jump(self.timeline.cursor().saturating_sub(1)),
            KeyCode::Char(']') => {
                let latest = self.timeline.len() - 1;
                self.jump((self.timeline.cursor() + 1).min(latest));
            }
            KeyCode::Char('g') => self.jump(0),
            KeyCode::Char('e') => self.jump(self.timeline.len() - 1),
            KeyCode::Char('s') => self.ascending = !self.ascending,
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        debug!(position = ?pos, "Placing mark");
        if let Err(e) = self.timeline.play(pos) {
            self.notice = Some(format!("Invalid move: {}. Try again.", e));
        }
    }

    fn jump(&mut self, index: usize) {
        debug!(index, "Jumping to snapshot");
        if let Err(e) = self.timeline.jump(index) {
            self.notice = Some(e.to_string());
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline = Timeline::new();
        self.cursor = Position::Center;
    }
}
