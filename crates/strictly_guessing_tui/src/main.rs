//! Strictly Guessing - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_guessing::{GuessingGame, Intent, RngSource};
use strictly_guessing_tui::{
    App, Cli, Command, GuessConfig, init_file_tracing, init_stderr_tracing, run_script,
    run_terminal, write_steps,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GuessConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { seed } => run_play(config.with_seed_override(seed)),
        Command::Script {
            seed,
            pretty,
            intents,
        } => run_scripted(config.with_seed_override(seed), &intents, pretty),
    }
}

/// Run the interactive terminal game
#[instrument(skip(config))]
fn run_play(config: GuessConfig) -> Result<()> {
    init_file_tracing(&config)?;
    info!(seeded = config.seed().is_some(), "Starting Strictly Guessing");

    let game = GuessingGame::new(RngSource::from_seed_option(*config.seed()));
    run_terminal(App::new(game))
}

/// Run intents headless and print snapshots to stdout
#[instrument(skip(config, intents))]
fn run_scripted(config: GuessConfig, intents: &[Intent], pretty: bool) -> Result<()> {
    init_stderr_tracing(&config);
    info!(count = intents.len(), "Running script");

    let mut game = GuessingGame::new(RngSource::from_seed_option(*config.seed()));
    let steps = run_script(&mut game, intents);

    let stdout = std::io::stdout();
    write_steps(&mut stdout.lock(), &steps, pretty)
}
