/// Hangman-specific renderer - draws a GameView, knows nothing about rules
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::hangman::engine::MAX_INCORRECT;
use crate::hangman::view::{GameStatus, GameView};

const KEYBOARD_ROWS: [&str; 4] = ["ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZ"];

/// Gallows drawing, one frame per incorrect guess.
static STAGES: [[&str; 6]; MAX_INCORRECT + 1] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========"],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========"],
];

pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render(frame: &mut Frame, view: &GameView, feedback: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!(" HANGMAN  ·  Theme: {} ", view.theme))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let stage = view.incorrect_count.min(MAX_INCORRECT);
        let gallows: Vec<Line> = stage_lines(stage).iter().map(|l| Line::from(*l)).collect();
        frame.render_widget(
            Paragraph::new(gallows)
                .block(Block::default().title(format!(" {}/{} ", stage, MAX_INCORRECT)).borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(spaced(&view.pattern))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::default().title(" PHRASE ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(keyboard(view))
                .block(Block::default().title(" LETTERS ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(status_lines(view, feedback))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[4],
        );

        frame.render_widget(
            Paragraph::new("[A-Z] Guess  [Enter] New phrase  [Tab] Theme  [Esc] Quit")
                .alignment(Alignment::Center),
            chunks[5],
        );
    }

    /// Centered rectangle clamped to `area`.
    pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

pub fn stage_lines(stage: usize) -> &'static [&'static str] {
    &STAGES[stage.min(MAX_INCORRECT)]
}

fn spaced(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn keyboard(view: &GameView) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|upper| {
                    let lower = upper.to_ascii_lowercase();
                    let style = if view.incorrect_guesses.contains(&lower) {
                        Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
                    } else if view.guessed_letters.contains(&lower) {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!(" {} ", upper), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn status_lines(view: &GameView, feedback: &str) -> Vec<Line<'static>> {
    match view.status {
        GameStatus::InProgress => vec![Line::from(format!("📢 {}", feedback))],
        status => {
            let color = if status == GameStatus::Won { Color::Green } else { Color::Red };
            let mut lines = vec![Line::styled(
                view.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            if let Some(answer) = &view.answer {
                lines.push(Line::from(format!("The phrase was '{}'.", answer)));
            }
            lines.push(Line::from("🏁 Press Enter to play again"));
            lines
        }
    }
}
