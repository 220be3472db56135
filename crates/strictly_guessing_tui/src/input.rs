//! Key bindings: terminal key events to intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_guessing::{GameState, Intent, Phase};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Send an intent to the state machine.
    Dispatch(Intent),
    /// Leave the application.
    Quit,
    /// Nothing bound to this key in this phase.
    None,
}

/// Maps a key press to an action for the current state.
///
/// Typing edits the pending guess in every started phase; the state machine
/// decides whether the edit counts. Esc and Ctrl-C always quit.
pub fn map_key(key: KeyEvent, state: &GameState) -> KeyAction {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return KeyAction::Quit;
    }

    let phase = state.phase();
    match (phase, key.code) {
        (Phase::NotStarted, KeyCode::Enter) => KeyAction::Dispatch(Intent::Start),
        (Phase::NotStarted, _) => KeyAction::None,

        (Phase::InProgress, KeyCode::Tab) => KeyAction::Dispatch(Intent::Pause),
        (Phase::Paused, KeyCode::Tab) => KeyAction::Dispatch(Intent::Resume),
        (Phase::InProgress | Phase::Paused, KeyCode::Enter) => {
            KeyAction::Dispatch(Intent::guess(state.pending_guess()))
        }

        (Phase::Over, KeyCode::Enter) => KeyAction::Dispatch(Intent::TryAgain),

        (_, KeyCode::Backspace) => {
            let mut edited = state.pending_guess().to_string();
            if edited.pop().is_some() {
                KeyAction::Dispatch(Intent::edit(edited))
            } else {
                KeyAction::None
            }
        }
        (_, KeyCode::Char(c)) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut edited = state.pending_guess().to_string();
            edited.push(c);
            KeyAction::Dispatch(Intent::edit(edited))
        }

        _ => KeyAction::None,
    }
}
