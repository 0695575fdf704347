/// Hangman: rules engine plus the terminal and line front ends
pub mod engine;
pub mod error;
pub mod game;
pub mod pattern;
pub mod plain;
pub mod renderer;
pub mod theme;
pub mod view;

pub use engine::{GameEngine, GuessOutcome, MAX_INCORRECT};
pub use error::HangmanError;
pub use game::HangmanGame;
pub use renderer::HangmanRenderer;
pub use theme::Theme;
pub use view::{GameStatus, GameView};
