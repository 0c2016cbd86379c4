//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules;
use crate::timeline::Timeline;
use crate::types::Board;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsOpen;

impl SquareIsOpen {
    /// Validates that the target square is unoccupied.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(mov.position()) {
            Err(MoveError::SquareOccupied(mov.position()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the board must not already have a winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Validates that no line is already complete.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if rules::winning_line(board).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal on an undecided board with an
/// open target square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameUndecided::check(board)?;
        SquareIsOpen::check(mov, board)?;
        Ok(())
    }
}

/// Contract for playing a move on a timeline.
///
/// Preconditions:
/// - Displayed board has no winner
/// - Target square is empty
///
/// Postconditions:
/// - All timeline invariants hold (snapshot progression, alternating
///   marks, cursor in bounds)
pub struct MoveContract;

impl Contract<Timeline, Move> for MoveContract {
    fn pre(timeline: &Timeline, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, timeline.board())
    }

    fn post(_before: &Timeline, after: &Timeline) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let timeline = Timeline::new();
        let action = Move::new(Player::X, Position::Center);

        assert!(MoveContract::pre(&timeline, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center).unwrap();

        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&timeline, &action),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_decided_board() {
        let mut timeline = Timeline::new();
        // X takes the top row
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ] {
            timeline.play(pos).unwrap();
        }

        let action = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(
            MoveContract::pre(&timeline, &action),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Timeline::new();
        let mut after = before.clone();
        after.play(Position::Center).unwrap();

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Timeline::new();
        let mut after = before.clone();
        after.play(Position::Center).unwrap();

        // Corrupt the latest snapshot
        after.snapshots[1].set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
