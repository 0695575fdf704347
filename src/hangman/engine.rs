//! Hangman rules: phrase selection, guess handling and win/lose state.
//!
//! The engine is synchronous and owned by a single driver (TUI loop, line
//! driver or test). Front ends either read it through the accessors or
//! subscribe to [`GameView`] snapshots published after every change.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::hangman::error::HangmanError;
use crate::hangman::pattern::RevealedPattern;
use crate::hangman::theme::Theme;
use crate::hangman::view::{GameStatus, GameView};

/// Incorrect guesses allowed before the game is lost.
pub const MAX_INCORRECT: usize = 6;

/// What a call to [`GameEngine::make_guess`] did. Only `Correct` and
/// `Incorrect` change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { revealed: usize },
    Incorrect,
    AlreadyGuessed,
    GameOver,
    NotALetter,
}

pub struct GameEngine {
    theme: Theme,
    target: &'static str,
    pattern: RevealedPattern,
    incorrect: Vec<char>,
    guessed: Vec<char>,
    rng: StdRng,
    publisher: watch::Sender<GameView>,
}

impl GameEngine {
    /// New game seeded from the OS.
    pub fn new(theme: Theme) -> Self {
        Self::from_rng(theme, StdRng::from_os_rng())
    }

    /// New game whose phrase sequence is fully determined by `seed`.
    pub fn seeded(theme: Theme, seed: u64) -> Self {
        Self::from_rng(theme, StdRng::seed_from_u64(seed))
    }

    /// Starts on a chosen phrase from `theme`'s list. Later restarts sample
    /// from `seed` as usual.
    pub fn with_phrase(theme: Theme, phrase: &str, seed: u64) -> Result<Self, HangmanError> {
        let target = theme
            .phrases()
            .iter()
            .copied()
            .find(|p| *p == phrase)
            .ok_or_else(|| HangmanError::PhraseNotInTheme {
                theme,
                phrase: phrase.to_string(),
            })?;

        Ok(Self::build(theme, StdRng::seed_from_u64(seed), target))
    }

    fn from_rng(theme: Theme, mut rng: StdRng) -> Self {
        let target = sample(theme, &mut rng);
        Self::build(theme, rng, target)
    }

    fn build(theme: Theme, rng: StdRng, target: &'static str) -> Self {
        let mut engine = Self {
            theme,
            target,
            pattern: RevealedPattern::new(target),
            incorrect: Vec::new(),
            guessed: Vec::new(),
            rng,
            publisher: watch::Sender::new(placeholder_view(theme)),
        };
        engine.start(target);
        engine
    }

    /// Resets all progress and draws a fresh phrase from the current theme.
    pub fn restart(&mut self) {
        let target = sample(self.theme, &mut self.rng);
        self.start(target);
    }

    /// Switches theme and restarts.
    pub fn pick_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.restart();
    }

    /// Parses `name` and switches to that theme. Unknown names leave the
    /// current game untouched.
    pub fn pick_theme_by_name(&mut self, name: &str) -> Result<Theme, HangmanError> {
        let theme = name.parse::<Theme>()?;
        self.pick_theme(theme);
        Ok(theme)
    }

    fn start(&mut self, target: &'static str) {
        self.target = target;
        self.pattern = RevealedPattern::new(target);
        self.incorrect.clear();
        self.guessed.clear();

        info!(theme = %self.theme, length = target.len(), "new game");
        self.publish();
    }

    /// Applies a single-letter guess. Case-insensitive; anything that is
    /// not an ASCII letter is ignored, as are repeats and guesses after the
    /// game has ended.
    pub fn make_guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::GameOver;
        }
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::NotALetter;
        }

        let letter = letter.to_ascii_lowercase();
        if self.incorrect.contains(&letter) || self.pattern.is_revealed(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        self.guessed.push(letter);
        let revealed = self.pattern.reveal(letter);
        let outcome = if revealed > 0 {
            GuessOutcome::Correct { revealed }
        } else {
            self.incorrect.push(letter);
            GuessOutcome::Incorrect
        };

        debug!(%letter, ?outcome, incorrect = self.incorrect.len(), "guess");
        if self.is_over() {
            info!(status = ?self.status(), answer = self.target, "game over");
        }

        self.publish();
        outcome
    }

    pub fn has_lost(&self) -> bool {
        self.incorrect_count() >= MAX_INCORRECT
    }

    /// Inclusive at the limit; only meaningful together with [`has_lost`].
    ///
    /// [`has_lost`]: GameEngine::has_lost
    pub fn has_won(&self) -> bool {
        self.pattern.is_complete() && self.incorrect_count() <= MAX_INCORRECT
    }

    pub fn is_over(&self) -> bool {
        self.has_won() || self.has_lost()
    }

    /// Loss wins the tie if both checks hold.
    pub fn status(&self) -> GameStatus {
        if self.has_lost() {
            GameStatus::Lost
        } else if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn final_message(&self) -> &'static str {
        self.status().message()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.theme.phrases()
    }

    pub fn target_phrase(&self) -> &'static str {
        self.target
    }

    pub fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    pub fn revealed_pattern(&self) -> String {
        self.pattern.to_string()
    }

    /// Wrong letters in the order they were guessed.
    pub fn incorrect_guesses(&self) -> &[char] {
        &self.incorrect
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    /// Every letter that counted as a guess, right or wrong, in order.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView {
            theme: self.theme,
            pattern: self.revealed_pattern(),
            incorrect_guesses: self.incorrect.clone(),
            guessed_letters: self.guessed.clone(),
            incorrect_count: self.incorrect_count(),
            status,
            message: status.message().to_string(),
            answer: status.is_over().then(|| self.target.to_string()),
        }
    }

    /// Receives a new [`GameView`] after every state change. No-op guesses
    /// do not notify.
    pub fn subscribe(&self) -> watch::Receiver<GameView> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.view());
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

fn sample(theme: Theme, rng: &mut StdRng) -> &'static str {
    let pool = theme.phrases();
    pool[rng.random_range(0..pool.len())]
}

fn placeholder_view(theme: Theme) -> GameView {
    GameView {
        theme,
        pattern: String::new(),
        incorrect_guesses: Vec::new(),
        guessed_letters: Vec::new(),
        incorrect_count: 0,
        status: GameStatus::InProgress,
        message: String::new(),
        answer: None,
    }
}
