//! Front ends for the strictly_guessing number game.
//!
//! # Architecture
//!
//! - **Terminal**: interactive ratatui screen driven by crossterm key events
//! - **Script**: headless runner printing a JSON snapshot per intent
//! - **Config**: TOML settings with command-line overrides
//!
//! Both front ends hold no game state of their own; they dispatch intents to
//! a [`strictly_guessing::GuessingGame`] and render what it reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod script;
mod terminal;
mod ui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration and tracing
pub use config::{ConfigError, GuessConfig};
pub use logging::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Terminal front end
pub use app::{App, START_PROMPT, status_message};
pub use input::{KeyAction, map_key};
pub use terminal::run_terminal;
pub use ui::{INPUT_PLACEHOLDER, draw, help_text};

// Crate-level exports - Script front end
pub use script::{ScriptStep, run_script, write_steps};
