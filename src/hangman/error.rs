use thiserror::Error;

use crate::hangman::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    /// Name that does not match any of the supported themes.
    #[error("unknown theme '{0}' (expected one of: Native American, Thanksgiving, Christmas)")]
    InvalidTheme(String),

    #[error("phrase '{phrase}' is not in the {theme} list")]
    PhraseNotInTheme { theme: Theme, phrase: String },
}
