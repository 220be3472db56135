//! Headless front end: applies a list of intents and emits JSON snapshots.

use anyhow::{Context, Result};
use derive_new::new;
use serde::Serialize;
use std::io::Write;
use strictly_guessing::{GameState, GuessingGame, Intent, NumberSource, Transition};
use tracing::{info, instrument};

/// One applied intent and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct ScriptStep {
    /// Position in the script, starting at 1.
    pub step: usize,
    /// The intent as given.
    pub intent: Intent,
    /// What the intent did.
    pub transition: Transition,
    /// State after the intent.
    pub state: GameState,
}

/// Applies `intents` in order and collects a step per intent.
#[instrument(skip(game, intents), fields(count = intents.len()))]
pub fn run_script<S: NumberSource>(
    game: &mut GuessingGame<S>,
    intents: &[Intent],
) -> Vec<ScriptStep> {
    let steps: Vec<ScriptStep> = intents
        .iter()
        .enumerate()
        .map(|(idx, intent)| {
            let transition = game.apply(intent.clone());
            ScriptStep::new(idx + 1, intent.clone(), transition, game.state().clone())
        })
        .collect();
    info!(final_phase = %game.state().phase(), "Script finished");
    steps
}

/// Writes one JSON document per step, one per line unless `pretty`.
pub fn write_steps(out: &mut impl Write, steps: &[ScriptStep], pretty: bool) -> Result<()> {
    for step in steps {
        let written = if pretty {
            serde_json::to_writer_pretty(&mut *out, step)
        } else {
            serde_json::to_writer(&mut *out, step)
        };
        written.with_context(|| format!("Failed to serialize step {}", step.step))?;
        writeln!(out)?;
    }
    Ok(())
}
