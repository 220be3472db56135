//! Command-line interface for strictly_guessing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_guessing::Intent;

/// Strictly Guessing - guess the number between 1 and 10
#[derive(Parser, Debug)]
#[command(name = "strictly_guessing")]
#[command(about = "Number-guessing game with a terminal UI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "strictly_guessing.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Seed for reproducible targets (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply intents without a terminal and print a JSON snapshot per step
    Script {
        /// Seed for reproducible targets (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Pretty-print each snapshot
        #[arg(long)]
        pretty: bool,

        /// Intents such as `start`, `guess 5`, `edit:7`, `pause`, `resume`, `try-again`
        #[arg(required = true)]
        intents: Vec<Intent>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_intents() {
        let cli = Cli::try_parse_from([
            "strictly_guessing",
            "script",
            "--seed",
            "4",
            "start",
            "guess 5",
            "edit:7",
        ])
        .unwrap();

        match cli.command {
            Command::Script {
                seed,
                pretty,
                intents,
            } => {
                assert_eq!(seed, Some(4));
                assert!(!pretty);
                assert_eq!(
                    intents,
                    vec![Intent::Start, Intent::guess("5"), Intent::edit("7")]
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_intent_is_a_usage_error() {
        assert!(Cli::try_parse_from(["strictly_guessing", "script", "jump"]).is_err());
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["strictly_guessing", "play", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Command::Play { seed: None }));
    }
}
