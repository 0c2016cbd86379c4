//! Snapshot progression invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::position::Position;
use crate::timeline::Timeline;
use crate::types::Square;

/// Invariant: the history is a chain of single-mark extensions.
///
/// Snapshot 0 is the empty board. Every later snapshot differs from its
/// predecessor in exactly one square, and that square goes from empty to
/// occupied. Marks are never moved, overwritten, or cleared.
pub struct SnapshotProgressionInvariant;

impl Invariant<Timeline> for SnapshotProgressionInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let snapshots = timeline.snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.occupied() != 0 {
            return false;
        }

        for pair in snapshots.windows(2) {
            let mut additions = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => additions += 1,
                    // Any other change rewrites an existing mark
                    _ => return false,
                }
            }
            if additions != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot extends the previous one by exactly one new mark"
    }
}
