//! Target range invariant.

use super::Invariant;
use crate::{GameState, TARGET_RANGE};

/// Invariant: a defined target lies in [`TARGET_RANGE`].
pub struct TargetInRangeInvariant;

impl Invariant<GameState> for TargetInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .target()
            .is_none_or(|target| TARGET_RANGE.contains(&target))
    }

    fn description() -> &'static str {
        "Target lies between 1 and 10"
    }
}
