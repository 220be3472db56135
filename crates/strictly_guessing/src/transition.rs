//! Transition reports and errors.

use crate::{Guess, GuessError, IntentKind, Phase};
use serde::{Deserialize, Serialize};

/// What applying an intent did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Transition {
    /// A round began and a target was drawn.
    #[display("Round started")]
    Started,

    /// Guessing was suspended.
    #[display("Paused")]
    Paused,

    /// Guessing resumed.
    #[display("Resumed")]
    Resumed,

    /// The guess hit the target; the round is over.
    #[display("{} is correct after {} misses", guess, attempts)]
    Guessed {
        /// The winning guess.
        guess: Guess,
        /// Misses before the winning guess.
        attempts: u32,
    },

    /// The guess missed; the attempt counter grew.
    #[display("{} is not it ({} misses)", guess, attempts)]
    Missed {
        /// The missed guess.
        guess: Guess,
        /// Misses so far, including this one.
        attempts: u32,
    },

    /// The submission did not parse and was ignored.
    #[display("Guess rejected: {}", _0)]
    Rejected(GuessError),

    /// The pending guess text was replaced.
    #[display("Input edited")]
    InputEdited,

    /// The round was discarded and the game returned to the start.
    #[display("Restarted")]
    Restarted,

    /// The intent is not legal in the current phase.
    #[display("Ignored {} while {}", intent, phase)]
    Ignored {
        /// Phase at the time of the intent.
        phase: Phase,
        /// The ignored intent.
        intent: IntentKind,
    },
}

impl Transition {
    /// Returns true if the state changed.
    pub fn changes_state(&self) -> bool {
        !matches!(self, Transition::Rejected(_) | Transition::Ignored { .. })
    }
}

/// Internal reasons a transition did not run or went wrong.
///
/// These never leave [`GuessingGame::apply`](crate::GuessingGame::apply);
/// they are turned into a [`Transition`] or a debug assertion.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TransitionError {
    /// The intent has no entry in the transition table for this phase.
    #[display("{} is not allowed while {}", intent, phase)]
    NotAllowed {
        /// Phase at the time of the intent.
        phase: Phase,
        /// The refused intent.
        intent: IntentKind,
    },

    /// The submitted text is not a valid guess.
    #[display("{}", _0)]
    InvalidGuess(GuessError),

    /// A postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for TransitionError {}

impl From<GuessError> for TransitionError {
    fn from(err: GuessError) -> Self {
        TransitionError::InvalidGuess(err)
    }
}
