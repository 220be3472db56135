//! Formal verification of invariants using the Kani model checker.
//!
//! These harnesses drive the state machine through bounded sequences of
//! arbitrary intents and check the invariant set after every step.

#[cfg(kani)]
mod proofs {
    use crate::{
        GuessingGame, GuessingInvariants, Intent, InvariantSet, Phase, ScriptedSource,
    };

    fn any_intent() -> Intent {
        let guess: i8 = kani::any();
        match kani::any::<u8>() % 6 {
            0 => Intent::Start,
            1 => Intent::Pause,
            2 => Intent::Resume,
            3 => Intent::SubmitGuess(guess.to_string()),
            4 => Intent::EditGuessInput(String::new()),
            _ => Intent::TryAgain,
        }
    }

    /// Proves the invariant set holds after any four intents.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_invariants_hold_for_intent_sequences() {
        let target: u8 = kani::any();
        let mut game = GuessingGame::new(ScriptedSource::constant(target));

        for _ in 0..4 {
            game.apply(any_intent());
            assert!(GuessingInvariants::check_all(game.state()).is_ok());
        }
    }

    /// Proves a paused game never counts an attempt.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_paused_guess_is_ignored() {
        let guess: i8 = kani::any();
        let mut game = GuessingGame::new(ScriptedSource::constant(5));
        game.apply(Intent::Start);
        game.apply(Intent::Pause);
        game.apply(Intent::SubmitGuess(guess.to_string()));

        assert_eq!(game.state().phase(), Phase::Paused);
        assert_eq!(game.state().attempts(), 0);
    }
}
