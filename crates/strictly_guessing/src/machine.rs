//! The guessing-game state machine.
//!
//! All game data lives in one [`GameState`]. Render surfaces read it through
//! [`GuessingGame::state`] and change it only by dispatching [`Intent`]s.
//! Each intent runs to completion, including observer notification, before
//! the next one is accepted.

use crate::contracts::{Contract, DispatchContract};
use crate::observer::Observers;
use crate::{
    DefaultSource, GameState, Guess, Intent, NumberSource, Phase, RngSource, StateObserver,
    SubscriptionId, TARGET_RANGE, Transition, TransitionError,
};
use tracing::{debug, error, info, instrument};

/// Number-guessing game driven by intents.
///
/// The number source is injected so tests can script the target.
pub struct GuessingGame<S = DefaultSource> {
    state: GameState,
    source: S,
    observers: Observers,
}

impl GuessingGame<DefaultSource> {
    /// Creates a game drawing targets from OS entropy.
    #[instrument]
    pub fn with_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Creates a game with a reproducible target sequence.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<S: NumberSource> GuessingGame<S> {
    /// Creates a not-started game using `source` for target draws.
    pub fn new(source: S) -> Self {
        Self {
            state: GameState::new(),
            source,
            observers: Observers::default(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the number source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Applies an intent and returns the resulting state.
    pub fn dispatch(&mut self, intent: Intent) -> &GameState {
        self.apply(intent);
        &self.state
    }

    /// Applies an intent and reports what it did.
    ///
    /// Intents that are not legal in the current phase, and guesses that do
    /// not parse, leave the state untouched. Observers are notified in every
    /// case.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a transition breaks a state invariant.
    #[instrument(skip(self), fields(phase = %self.state.phase))]
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let transition = match self.step(intent) {
            Ok(transition) => transition,
            Err(TransitionError::NotAllowed { phase, intent }) => {
                debug!(%phase, %intent, "Intent ignored");
                Transition::Ignored { phase, intent }
            }
            Err(TransitionError::InvalidGuess(reason)) => {
                debug!(%reason, "Guess rejected");
                Transition::Rejected(reason)
            }
            Err(violation @ TransitionError::InvariantViolation(_)) => {
                error!(%violation, "Postcondition failed");
                panic!("{violation}");
            }
        };

        self.observers.notify(&self.state, &transition);
        transition
    }

    /// Subscribes an observer to every future transition.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> SubscriptionId {
        let id = self.observers.add(Box::new(observer));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not subscribed.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Returns the number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Runs the guarded transition.
    ///
    /// Postconditions are checked in debug builds only.
    fn step(&mut self, intent: Intent) -> Result<Transition, TransitionError> {
        DispatchContract::pre(&self.state, &intent)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let transition = match intent {
            Intent::Start => self.start(),
            Intent::Pause => {
                self.state.phase = Phase::Paused;
                Transition::Paused
            }
            Intent::Resume => {
                self.state.phase = Phase::InProgress;
                Transition::Resumed
            }
            Intent::SubmitGuess(raw) => self.submit(&raw)?,
            Intent::EditGuessInput(raw) => {
                self.state.pending_guess = raw;
                Transition::InputEdited
            }
            Intent::TryAgain => {
                info!(attempts = self.state.attempts, "Round discarded");
                self.state = GameState::new();
                Transition::Restarted
            }
        };

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        DispatchContract::post(&before, &self.state)?;

        Ok(transition)
    }

    fn start(&mut self) -> Transition {
        let target = self.source.draw(TARGET_RANGE);
        self.state.target = Some(target);
        self.state.attempts = 0;
        self.state.phase = Phase::InProgress;
        info!("Round started");
        Transition::Started
    }

    fn submit(&mut self, raw: &str) -> Result<Transition, TransitionError> {
        let guess = Guess::parse(raw)?;
        let hit = self.state.target.is_some_and(|target| guess.matches(target));

        if hit {
            self.state.phase = Phase::Over;
            info!(%guess, attempts = self.state.attempts, "Target guessed");
            Ok(Transition::Guessed {
                guess,
                attempts: self.state.attempts,
            })
        } else {
            self.state.attempts = self.state.attempts.saturating_add(1);
            debug!(%guess, attempts = self.state.attempts, "Missed");
            Ok(Transition::Missed {
                guess,
                attempts: self.state.attempts,
            })
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for GuessingGame<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessingGame")
            .field("state", &self.state)
            .field("source", &self.source)
            .field("observers", &self.observers)
            .finish()
    }
}

impl Default for GuessingGame<DefaultSource> {
    fn default() -> Self {
        Self::with_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    #[test]
    fn test_start_draws_once_and_resets_attempts() {
        let mut game = GuessingGame::new(ScriptedSource::constant(6));
        assert_eq!(game.apply(Intent::Start), Transition::Started);
        assert_eq!(game.state().target(), Some(6));
        assert_eq!(game.state().attempts(), 0);
        assert_eq!(game.source().draws(), 1);
    }

    #[test]
    fn test_resume_does_not_redraw() {
        let mut game = GuessingGame::new(ScriptedSource::new(vec![2, 9]));
        game.apply(Intent::Start);
        game.apply(Intent::Pause);
        game.apply(Intent::Resume);
        assert_eq!(game.state().target(), Some(2));
        assert_eq!(game.source().draws(), 1);
    }

    #[test]
    fn test_edit_replaces_pending_guess_verbatim() {
        let mut game = GuessingGame::new(ScriptedSource::constant(1));
        game.apply(Intent::Start);
        assert_eq!(game.apply(Intent::edit(" 4x")), Transition::InputEdited);
        assert_eq!(game.state().pending_guess(), " 4x");
    }

    #[test]
    fn test_edit_ignored_before_start() {
        let mut game = GuessingGame::new(ScriptedSource::constant(1));
        let transition = game.apply(Intent::edit("3"));
        assert!(matches!(transition, Transition::Ignored { .. }));
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_submit_does_not_clear_pending_guess() {
        let mut game = GuessingGame::new(ScriptedSource::constant(1));
        game.apply(Intent::Start);
        game.apply(Intent::edit("3"));
        game.apply(Intent::guess("3"));
        assert_eq!(game.state().pending_guess(), "3");
    }

    #[test]
    fn test_miss_at_attempt_ceiling_saturates() {
        let mut game = GuessingGame::new(ScriptedSource::constant(4));
        game.apply(Intent::Start);
        game.state.attempts = u32::MAX;

        let transition = game.apply(Intent::guess("5"));
        assert_eq!(
            transition,
            Transition::Missed {
                guess: Guess::Number(5),
                attempts: u32::MAX
            }
        );
        assert_eq!(game.state().attempts(), u32::MAX);
    }

    #[test]
    fn test_dispatch_returns_new_state() {
        let mut game = GuessingGame::new(ScriptedSource::constant(1));
        assert_eq!(game.dispatch(Intent::Start).phase(), Phase::InProgress);
    }
}
