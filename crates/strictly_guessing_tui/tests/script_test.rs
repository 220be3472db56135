//! Tests for the headless script front end.

use clap::Parser;
use strictly_guessing::{GuessingGame, Intent, Phase, RngSource, Transition};
use strictly_guessing_tui::{Cli, Command, run_script, write_steps};

fn parse_intents(args: &[&str]) -> Vec<Intent> {
    let argv = ["strictly_guessing", "script"].iter().chain(args.iter());
    match Cli::try_parse_from(argv).expect("valid command line").command {
        Command::Script { intents, .. } => intents,
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_seeded_scripts_are_reproducible() {
    let intents = parse_intents(&["start", "guess 1", "pause", "resume", "guess 2"]);

    let mut first = GuessingGame::new(RngSource::seeded(99));
    let mut second = GuessingGame::new(RngSource::seeded(99));

    assert_eq!(
        run_script(&mut first, &intents),
        run_script(&mut second, &intents)
    );
}

#[test]
fn test_script_finds_target_by_sweeping() {
    let mut game = GuessingGame::new(RngSource::seeded(5));
    let mut intents = vec![Intent::Start];
    intents.extend((1..=10).map(|n| Intent::guess(n.to_string())));

    let steps = run_script(&mut game, &intents);
    let target = game.state().target().expect("target drawn");

    let winning = steps
        .iter()
        .find(|s| matches!(s.transition, Transition::Guessed { .. }))
        .expect("sweep hits the target");
    assert_eq!(winning.state.attempts(), u32::from(target) - 1);
    assert_eq!(game.state().phase(), Phase::Over);

    // Guesses after the win are ignored.
    assert!(
        steps
            .iter()
            .skip(usize::from(target) + 1)
            .all(|s| matches!(s.transition, Transition::Ignored { .. }))
    );
}

#[test]
fn test_pretty_output_parses_back() {
    let mut game = GuessingGame::new(RngSource::seeded(1));
    let steps = run_script(&mut game, &parse_intents(&["start", "guess:abc"]));

    let mut out = Vec::new();
    write_steps(&mut out, &steps, true).expect("write succeeds");
    let text = String::from_utf8(out).expect("utf8");

    let docs: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("valid json stream");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["state"]["attempts"], 0);
    assert_eq!(docs[1]["transition"]["Rejected"]["NotANumber"], "abc");
}
