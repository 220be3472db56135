//! Interactive terminal front end.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_guessing::NumberSource;
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::ui;

/// Restores the terminal on drop, including on early return and unwind.
///
/// Only the steps that succeeded in [`TerminalGuard::enter`] are undone.
#[derive(Debug, Default)]
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    fn enter() -> Result<Self> {
        let mut guard = Self::default();
        enable_raw_mode()?;
        guard.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    fn is_engaged(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.is_engaged() {
            return;
        }
        debug!("Restoring terminal");

        if self.alternate_screen {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
    }
}

/// Takes over the terminal and runs the game until the player quits.
///
/// The terminal is restored even when setup or the event loop fails.
#[instrument(skip(app))]
pub fn run_terminal<S: NumberSource>(app: App<S>) -> Result<()> {
    info!("Starting terminal front end");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = event_loop(&mut terminal, app);
    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal front end stopped");
    res
}

fn event_loop<S: NumberSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        let status = app.status_message();
        terminal.draw(|f| ui::draw(f, app.state(), &status))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
