use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::game::{Control, Game};
use crate::core::menu::{Menu, MenuResult};
use crate::hangman::engine::{GameEngine, GuessOutcome};
use crate::hangman::renderer::HangmanRenderer;
use crate::hangman::theme::Theme;

/// Terminal front end: keys in, engine calls out. No rules live here.
pub struct HangmanGame {
    engine: GameEngine,
    theme_menu: Option<Menu>,
    feedback: String,
}

impl HangmanGame {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            theme_menu: None,
            feedback: "Type a letter to guess".into(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_picking_theme(&self) -> bool {
        self.theme_menu.is_some()
    }

    fn open_theme_menu(&mut self) {
        let current = Theme::ALL
            .iter()
            .position(|t| *t == self.engine.theme())
            .unwrap_or(0);
        let names = Theme::ALL.iter().map(|t| t.to_string()).collect();
        self.theme_menu = Some(Menu::new("THEME", names, current));
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let Some(menu) = self.theme_menu.as_mut() else {
            return;
        };
        match menu.handle_key(code) {
            MenuResult::Picked(index) => {
                let theme = Theme::ALL[index];
                self.engine.pick_theme(theme);
                self.feedback = format!("New {} phrase", theme);
                self.theme_menu = None;
            }
            MenuResult::Cancelled => self.theme_menu = None,
            MenuResult::Pending => {}
        }
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, event: KeyEvent) -> Control {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Control::Quit;
        }
        if self.theme_menu.is_some() {
            self.handle_menu_key(event.code);
            return Control::Continue;
        }

        match event.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.open_theme_menu(),
            KeyCode::Enter => {
                self.engine.restart();
                self.feedback = "New phrase".into();
            }
            KeyCode::Char(c) => {
                let outcome = self.engine.make_guess(c);
                self.feedback = describe(outcome, c);
            }
            _ => {}
        }
        Control::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, &self.engine.view(), &self.feedback);

        if let Some(menu) = &self.theme_menu {
            let area = HangmanRenderer::popup_area(frame.area(), 40, 7);
            menu.render(frame, area);
        }
    }
}

pub(crate) fn describe(outcome: GuessOutcome, letter: char) -> String {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Correct { revealed: 1 } => format!("Good guess! '{}' is in the phrase.", letter),
        GuessOutcome::Correct { revealed } => format!("Good guess! '{}' appears {} times.", letter, revealed),
        GuessOutcome::Incorrect => format!("Sorry, '{}' is not in the phrase.", letter),
        GuessOutcome::AlreadyGuessed => format!("'{}' was already guessed.", letter),
        GuessOutcome::GameOver => "Game over! Press Enter for a new phrase.".into(),
        GuessOutcome::NotALetter => "Please guess a letter A-Z.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn game() -> HangmanGame {
        HangmanGame::new(GameEngine::with_phrase(Theme::NativeAmerican, "buffalo", 3).unwrap())
    }

    #[test]
    fn test_letter_keys_guess() {
        let mut g = game();
        assert_eq!(g.handle_input(key(KeyCode::Char('F'))), Control::Continue);
        assert_eq!(g.engine().revealed_pattern(), "--ff---");
        assert_eq!(g.feedback(), "Good guess! 'F' appears 2 times.");

        g.handle_input(key(KeyCode::Char('z')));
        assert_eq!(g.engine().incorrect_guesses(), &['z']);
        assert_eq!(g.feedback(), "Sorry, 'Z' is not in the phrase.");
    }

    #[test]
    fn test_quit_keys() {
        let mut g = game();
        assert_eq!(g.handle_input(key(KeyCode::Esc)), Control::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(g.handle_input(ctrl_c), Control::Quit);
        assert_eq!(g.engine().revealed_pattern(), "-------");
    }

    #[test]
    fn test_theme_menu_picks_theme() {
        let mut g = game();
        g.handle_input(key(KeyCode::Tab));
        assert!(g.is_picking_theme());

        // Letters go to the menu, not the engine
        g.handle_input(key(KeyCode::Char('b')));
        assert_eq!(g.engine().incorrect_count(), 0);
        assert!(!g.engine().pattern().is_revealed('b'));

        g.handle_input(key(KeyCode::Down));
        g.handle_input(key(KeyCode::Down));
        g.handle_input(key(KeyCode::Enter));

        assert!(!g.is_picking_theme());
        assert_eq!(g.engine().theme(), Theme::Christmas);
        assert!(Theme::Christmas.contains(g.engine().target_phrase()));
    }

    #[test]
    fn test_theme_menu_escape_keeps_game() {
        let mut g = game();
        g.handle_input(key(KeyCode::Char('f')));
        g.handle_input(key(KeyCode::Tab));
        assert_eq!(g.handle_input(key(KeyCode::Esc)), Control::Continue);

        assert!(!g.is_picking_theme());
        assert_eq!(g.engine().revealed_pattern(), "--ff---");
    }

    #[test]
    fn test_enter_restarts() {
        let mut g = game();
        g.handle_input(key(KeyCode::Char('q')));
        g.handle_input(key(KeyCode::Enter));
        assert_eq!(g.engine().incorrect_count(), 0);
        assert_eq!(g.engine().theme(), Theme::NativeAmerican);
    }
}
