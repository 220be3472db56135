//! Application state for the terminal front end.
//!
//! The game itself lives in [`GuessingGame`]; the app only keeps what the
//! screen needs on top of it (the status line and the quit flag). The status
//! line is fed by a state-machine subscription.

use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::rc::Rc;
use strictly_guessing::{
    DefaultSource, GameState, GuessError, GuessingGame, IntentKind, NumberSource, Phase, Transition,
};
use tracing::{debug, instrument};

use crate::input::{KeyAction, map_key};

/// Prompt shown before a round starts.
pub const START_PROMPT: &str = "Press Enter to start a new game.";

/// Main application state.
pub struct App<S = DefaultSource> {
    game: GuessingGame<S>,
    status: Rc<RefCell<String>>,
    quit: bool,
}

impl<S: NumberSource> App<S> {
    /// Creates the app and subscribes its status line to the game.
    #[instrument(skip(game))]
    pub fn new(mut game: GuessingGame<S>) -> Self {
        let status = Rc::new(RefCell::new(START_PROMPT.to_string()));
        let line = Rc::clone(&status);
        game.subscribe(move |state: &GameState, transition: &Transition| {
            if let Some(message) = status_message(state, transition) {
                *line.borrow_mut() = message;
            }
        });
        Self {
            game,
            status,
            quit: false,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Returns the status line.
    pub fn status_message(&self) -> String {
        self.status.borrow().clone()
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key, self.game.state()) {
            KeyAction::Dispatch(intent) => {
                let transition = self.game.apply(intent);
                debug!(%transition, "Key handled");
            }
            KeyAction::Quit => {
                debug!("Quit requested");
                self.quit = true;
            }
            KeyAction::None => {}
        }
    }
}

/// Status line text for a transition. `None` keeps the previous text.
pub fn status_message(state: &GameState, transition: &Transition) -> Option<String> {
    let message = match transition {
        Transition::Started => "Guess a number between 1 and 10.".to_string(),
        Transition::Paused => "Paused. Press Tab to resume.".to_string(),
        Transition::Resumed => "Back in the game.".to_string(),
        Transition::Guessed { .. } => format!(
            "You guessed the number in {} attempts.",
            state.attempts()
        ),
        Transition::Missed { guess, .. } => format!("{} is not it. Try again.", guess),
        Transition::Rejected(GuessError::Empty) => "Type a number first.".to_string(),
        Transition::Rejected(reason) => format!("{}.", reason),
        Transition::Restarted => START_PROMPT.to_string(),
        Transition::Ignored {
            phase: Phase::Paused,
            intent: IntentKind::SubmitGuess,
        } => "The game is paused. Press Tab to resume.".to_string(),
        Transition::InputEdited | Transition::Ignored { .. } => return None,
    };
    Some(message)
}
