//! Cursor bounds invariant: the cursor always names a recorded snapshot.

use super::Invariant;
use crate::timeline::Timeline;

/// Invariant: the cursor points inside the snapshot history.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
