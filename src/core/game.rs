/// Core game interface for the hangterm terminal loop
use crossterm::event::KeyEvent;

/// What the loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Main game trait driven by [`crate::core::engine::Engine`]
pub trait Game {
    /// Handle a single key press
    fn handle_input(&mut self, event: KeyEvent) -> Control;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
