//! Fresh setup invariant: the start screen carries nothing from a previous round.

use super::Invariant;
use crate::{GameState, Phase};

/// Invariant: while `NotStarted`, attempts are zero and no guess is pending.
pub struct FreshSetupInvariant;

impl Invariant<GameState> for FreshSetupInvariant {
    fn holds(state: &GameState) -> bool {
        state.phase() != Phase::NotStarted
            || (state.attempts() == 0 && state.pending_guess().is_empty())
    }

    fn description() -> &'static str {
        "Not-started state has zero attempts and no pending guess"
    }
}
