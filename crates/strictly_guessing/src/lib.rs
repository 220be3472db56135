//! Strictly Guessing - a number-guessing game as an explicit state machine.
//!
//! The game draws a secret number between 1 and 10 and counts the wrong
//! guesses until the player finds it. Presentation lives elsewhere: render
//! surfaces read [`GameState`] snapshots and send [`Intent`]s.
//!
//! # Architecture
//!
//! - **Machine**: [`GuessingGame`] owns the state and applies intents
//! - **Contracts**: guarded transitions with debug-build postconditions
//! - **Invariants**: composable properties checked after every step
//! - **Source**: injectable randomness ([`NumberSource`])
//! - **Observers**: render surfaces subscribe to transitions
//!
//! # Example
//!
//! ```
//! use strictly_guessing::{GuessingGame, Intent, Phase, ScriptedSource};
//!
//! let mut game = GuessingGame::new(ScriptedSource::constant(7));
//! game.dispatch(Intent::Start);
//! game.dispatch(Intent::guess("5"));
//! assert_eq!(game.state().attempts(), 1);
//!
//! let state = game.dispatch(Intent::guess("7"));
//! assert_eq!(state.phase(), Phase::Over);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod guess;
mod intent;
pub mod invariants;
mod machine;
mod observer;
mod phase;
mod source;
mod state;
mod transition;

// Crate-level exports - State machine
pub use machine::GuessingGame;
pub use phase::Phase;
pub use state::GameState;
pub use transition::{Transition, TransitionError};

// Crate-level exports - Intents and guesses
pub use guess::{Guess, GuessError};
pub use intent::{Intent, IntentKind, IntentParseError};

// Crate-level exports - Randomness
pub use source::{DefaultSource, NumberSource, RngSource, ScriptedSource, TARGET_RANGE};

// Crate-level exports - Observers
pub use observer::{StateObserver, SubscriptionId};

// Crate-level exports - Contracts and invariants
pub use contracts::{AttemptsMonotonic, Contract, DispatchContract, IntentAllowed, TargetStable};
pub use invariants::{
    FreshSetupInvariant, GuessingInvariants, Invariant, InvariantSet, InvariantViolation,
    TargetInRangeInvariant, TargetPresenceInvariant,
};
