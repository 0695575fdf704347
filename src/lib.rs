pub mod core {
	pub mod engine;
	pub mod game;
	pub mod menu;
}

pub mod cli;
pub mod config;
pub mod hangman;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Control, Game};
pub use crate::hangman::{GameEngine, GameView, GuessOutcome, HangmanError, Theme};
