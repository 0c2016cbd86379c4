//! Session state: every board visited, plus a movable cursor.
//!
//! The timeline owns the append-and-truncate log of board snapshots.
//! Snapshot 0 is always the empty board. The cursor selects the displayed
//! snapshot and determines whose turn it is (even cursor means X moves).
//! Playing after a jump discards every snapshot past the cursor before
//! appending; branching history is not supported, only linear overwrite.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Applies a move to a board, returning the resulting board.
///
/// Pure: the input board is never mutated.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board already has a winner and
/// [`MoveError::SquareOccupied`] if the target square is taken. In both
/// cases no new board is produced.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, mov: Move) -> Result<Board, MoveError> {
    LegalMove::check(&mov, board)?;

    let mut next = board.clone();
    next.set(mov.position(), Square::Occupied(mov.player()));
    Ok(next)
}

/// Error that can occur when moving the history cursor.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested move index does not exist.
    #[display("Move index {index} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// A tic-tac-toe session with time travel.
///
/// Owns the full history of board snapshots and the cursor into it.
/// State transitions go through `&mut self` methods built on the pure
/// helpers in this module; there is no ambient or global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl Timeline {
    /// Creates a new session: one empty snapshot, cursor at the start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the displayed board snapshot.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the player to move at the displayed snapshot.
    ///
    /// Derived from cursor parity: X moves on even indices.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the cursor into the snapshot history.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns all recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots recorded, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshots are recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Evaluates the outcome of the displayed snapshot.
    ///
    /// Recomputed on every call; never cached.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Places the current player's mark and records the new snapshot.
    ///
    /// Truncates the history to the cursor first, so playing after a jump
    /// overwrites the abandoned future. The cursor lands on the new
    /// snapshot and the new outcome is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] or [`MoveError::GameOver`]
    /// without touching the history.
    #[instrument(skip(self), fields(position = ?position, player = ?self.to_move()))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        let mov = Move::new(self.to_move(), position);

        // Store state for postcondition checking
        let before = self.clone();

        // Precondition: check contract
        MoveContract::pre(self, &mov)?;

        let next = apply_move(self.board(), mov)?;

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        // Postcondition: verify contract in debug builds
        if cfg!(debug_assertions) {
            MoveContract::post(&before, self)?;
        }

        Ok(self.outcome())
    }

    /// Moves the cursor to the given snapshot index.
    ///
    /// The history itself is never altered; whose turn it is and the
    /// displayed outcome follow from the new cursor.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if the index does not name a
    /// recorded snapshot.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
