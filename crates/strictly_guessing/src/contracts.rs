//! Contract-based validation for the guessing game.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, intent)} apply {Q(before, after)}`.

use crate::invariants::{GuessingInvariants, InvariantSet};
use crate::{GameState, Intent, IntentKind, Phase, TransitionError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), TransitionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), TransitionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the intent has an entry in the transition table for the
/// current phase.
pub struct IntentAllowed;

impl IntentAllowed {
    /// Returns true if `intent` may be applied while in `phase`.
    pub fn permits(phase: Phase, intent: IntentKind) -> bool {
        use IntentKind::*;

        match intent {
            Start => phase == Phase::NotStarted,
            Pause | SubmitGuess => phase == Phase::InProgress,
            Resume => phase == Phase::Paused,
            EditGuessInput => phase.accepts_input(),
            TryAgain => phase == Phase::Over,
        }
    }

    /// Checks the guard for a concrete intent.
    #[instrument(skip(state))]
    pub fn check(intent: &Intent, state: &GameState) -> Result<(), TransitionError> {
        let phase = state.phase();
        let kind = intent.kind();
        if Self::permits(phase, kind) {
            Ok(())
        } else {
            Err(TransitionError::NotAllowed {
                phase,
                intent: kind,
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: attempts never decrease, except when returning to the
/// start screen.
pub struct AttemptsMonotonic;

impl AttemptsMonotonic {
    /// Returns true if the step from `before` to `after` respects the rule.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let restarted = after.phase() == Phase::NotStarted;
        let valid = restarted || after.attempts() >= before.attempts();
        if !valid {
            warn!(
                before = before.attempts(),
                after = after.attempts(),
                "Attempt counter decreased"
            );
        }
        valid
    }
}

/// Postcondition: a round keeps the target it started with.
pub struct TargetStable;

impl TargetStable {
    /// Returns true unless a target silently changed mid-round.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let valid = match (before.target(), after.target()) {
            (Some(old), Some(new)) => old == new,
            _ => true,
        };
        if !valid {
            warn!("Target changed during a round");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Dispatch Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for every intent.
///
/// Preconditions:
/// - The intent is legal in the current phase
///
/// Postconditions:
/// - [`GuessingInvariants`] hold
/// - Attempts are monotonic outside restarts
/// - The target is stable within a round
pub struct DispatchContract;

impl Contract<GameState, Intent> for DispatchContract {
    fn pre(state: &GameState, intent: &Intent) -> Result<(), TransitionError> {
        IntentAllowed::check(intent, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), TransitionError> {
        let mut descriptions = match GuessingInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !AttemptsMonotonic::holds(before, after) {
            descriptions.push("Attempts never decrease within a round".to_string());
        }
        if !TargetStable::holds(before, after) {
            descriptions.push("Target is drawn once per round".to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(TransitionError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}
