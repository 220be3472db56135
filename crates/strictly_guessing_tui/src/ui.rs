//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_guessing::{GameState, Phase};

/// Placeholder shown in an empty guess box.
pub const INPUT_PLACEHOLDER: &str = "Enter your guess";

/// Draws the whole screen for the current state.
pub fn draw(frame: &mut Frame, state: &GameState, status: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Min(7),    // Phase view
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    match state.phase() {
        Phase::NotStarted => draw_start(frame, chunks[1]),
        Phase::InProgress | Phase::Paused => draw_round(frame, chunks[1], state),
        Phase::Over => draw_over(frame, chunks[1], state),
    }

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(help_text(state.phase()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Key hints for a phase.
pub fn help_text(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "Enter: Start Game | Esc: Quit",
        Phase::InProgress => "Type a number | Enter: Guess | Tab: Pause | Esc: Quit",
        Phase::Paused => "Tab: Resume | Esc: Quit",
        Phase::Over => "Enter: Try Again | Esc: Quit",
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Number Guessing Game",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Try to guess the number between 1 and 10!"),
    ];
    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_start(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(
        "[ Start Game ]",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, center_rect(area, 30, 1));
}

fn draw_round(frame: &mut Frame, area: Rect, state: &GameState) {
    let paused = state.phase() == Phase::Paused;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Pause control
            Constraint::Length(3), // Input
            Constraint::Length(1), // Guess button
            Constraint::Length(1), // Attempts
        ])
        .split(center_rect(area, 36, 6));

    let (control, control_style) = if paused {
        ("[ Resume ]", Style::default().fg(Color::Yellow))
    } else {
        ("[ Pause ]", Style::default().fg(Color::Gray))
    };
    frame.render_widget(
        Paragraph::new(control)
            .style(control_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows[0],
    );

    let (text, text_style) = if state.pending_guess().is_empty() {
        (INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (state.pending_guess(), Style::default().fg(Color::White))
    };
    let input_style = if paused {
        text_style.add_modifier(Modifier::DIM)
    } else {
        text_style
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(input_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        rows[1],
    );

    let guess_style = if paused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new("[ Guess ]")
            .style(guess_style)
            .alignment(Alignment::Center),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(format!("Attempts: {}", state.attempts())).alignment(Alignment::Center),
        rows[3],
    );
}

fn draw_over(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "You guessed the number in {} attempts.",
            state.attempts()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Try Again ]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center_rect(area, 44, 4),
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
