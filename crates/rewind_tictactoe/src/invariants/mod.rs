//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees.

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod snapshot_progression;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use snapshot_progression::SnapshotProgressionInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    SnapshotProgressionInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::timeline::Timeline;
    use crate::types::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let timeline = Timeline::new();
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut timeline = Timeline::new();
        timeline.play(Position::TopLeft).unwrap();
        timeline.play(Position::Center).unwrap();
        timeline.play(Position::TopRight).unwrap();

        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut timeline = Timeline::new();
        timeline.play(Position::Center).unwrap();

        // Corrupt the latest snapshot
        timeline.snapshots[1].set(Position::TopLeft, Square::Occupied(Player::O));

        let result = TimelineInvariants::check_all(&timeline);
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let timeline = Timeline::new();

        type TwoInvariants = (SnapshotProgressionInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&timeline).is_ok());
    }
}
