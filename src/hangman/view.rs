use serde::{Deserialize, Serialize};

use crate::hangman::theme::Theme;

pub const WIN_MESSAGE: &str = "Congratulations! You win!";
pub const LOSE_MESSAGE: &str = "You lose :(";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// End-of-game notice; empty while the game is running.
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::Won => WIN_MESSAGE,
            GameStatus::Lost => LOSE_MESSAGE,
        }
    }
}

/// Snapshot of everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub theme: Theme,
    pub pattern: String,
    pub incorrect_guesses: Vec<char>,
    /// Every effective guess, correct or not, in guess order.
    pub guessed_letters: Vec<char>,
    pub incorrect_count: usize,
    pub status: GameStatus,
    pub message: String,
    /// Only filled in once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl GameView {
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
