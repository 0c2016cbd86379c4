//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be recomputed on every interaction and
//! composed into contracts.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// Lines are checked in a fixed order (rows top to bottom, columns left
/// to right, then the two diagonals); the first completed line wins ties
/// on crafted boards with more than one line. A full board with no line
/// is a draw; anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        Outcome::Winner { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
