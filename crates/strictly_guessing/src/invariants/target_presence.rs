//! Target presence invariant: a target exists exactly when a round is running.

use super::Invariant;
use crate::GameState;

/// Invariant: `target` is defined iff the phase is not `NotStarted`.
pub struct TargetPresenceInvariant;

impl Invariant<GameState> for TargetPresenceInvariant {
    fn holds(state: &GameState) -> bool {
        state.phase().has_target() == state.target().is_some()
    }

    fn description() -> &'static str {
        "Target is defined exactly while a round is started"
    }
}
