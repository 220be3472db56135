//! Game state snapshot.

use crate::Phase;
use serde::{Deserialize, Serialize};

/// Complete state of one guessing session.
///
/// Fields are only mutated by the state machine; render surfaces read them
/// through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) phase: Phase,
    /// Secret number. `None` exactly while not started.
    pub(crate) target: Option<u8>,
    /// Raw text the player is typing. Empty means no pending guess.
    pub(crate) pending_guess: String,
    /// Incorrect, validly parsed guesses this round.
    pub(crate) attempts: u32,
}

impl GameState {
    /// Creates a fresh, not-started state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the target, if one has been drawn.
    pub fn target(&self) -> Option<u8> {
        self.target
    }

    /// Returns the pending guess text.
    pub fn pending_guess(&self) -> &str {
        &self.pending_guess
    }

    /// Returns the number of incorrect guesses.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns true once the target has been guessed.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}
