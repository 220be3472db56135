//! Game phases.
//!
//! The phase is the single discriminant that decides which intents the
//! state machine accepts.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Discrete mode of a guessing session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Phase {
    /// Waiting for the player to start. No target exists.
    #[default]
    NotStarted,
    /// Target drawn, guesses accepted.
    InProgress,
    /// Target drawn, guesses refused until resumed.
    Paused,
    /// Target guessed. Terminal until the player tries again.
    Over,
}

impl Phase {
    /// Returns true if a target must exist in this phase.
    pub fn has_target(self) -> bool {
        !matches!(self, Phase::NotStarted)
    }

    /// Returns true if the pending guess may be edited in this phase.
    pub fn accepts_input(self) -> bool {
        self.has_target()
    }
}
