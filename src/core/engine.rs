use crate::core::game::{Control, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

/// Redraw cadence while waiting for input.
const FRAME: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until the game asks to quit. Returns the game so callers can
    /// inspect its final state.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.game.handle_input(key) == Control::Quit {
                        debug!("quit requested");
                        return Ok(self.game);
                    }
                }
            }

            tokio::time::sleep(FRAME).await;
        }
    }
}
