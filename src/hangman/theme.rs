use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hangman::error::HangmanError;

/// Category selecting which phrase list a game draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    NativeAmerican,
    Thanksgiving,
    Christmas,
}

const NATIVE_AMERICAN: &[&str] = &[
    "mayflower", "plymouth", "arrowhead", "buffalo", "wildlife", "pilgrims", "bone", "canoe",
    "ceremony", "fur", "harvest", "ritual", "spear", "apache", "comanche", "cherokee", "crow",
    "navajo", "pueblo", "sioux",
];

const THANKSGIVING: &[&str] = &[
    "turkey", "stuffing", "corn", "grateful", "feast", "america", "autumn", "celebrate", "fall",
    "gobble", "gravy", "harvest", "ham", "leaf", "november", "pie", "squash", "thankful",
    "tradition", "yam",
];

const CHRISTMAS: &[&str] = &[
    "rudolph", "blitzen", "comet", "cupid", "dasher", "dancer", "prancer", "angel", "bell",
    "chimney", "december", "frosty", "snowman", "icicle", "miracle", "merry", "noel", "grinch",
    "scrooge", "tinsel", "star", "toys", "yuletide",
];

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::NativeAmerican, Theme::Thanksgiving, Theme::Christmas];

    /// Static phrase pool for this theme. Never empty.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Theme::NativeAmerican => NATIVE_AMERICAN,
            Theme::Thanksgiving => THANKSGIVING,
            Theme::Christmas => CHRISTMAS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::NativeAmerican => "Native American",
            Theme::Thanksgiving => "Thanksgiving",
            Theme::Christmas => "Christmas",
        }
    }

    /// Command-line / config spelling.
    pub fn slug(self) -> &'static str {
        match self {
            Theme::NativeAmerican => "native-american",
            Theme::Thanksgiving => "thanksgiving",
            Theme::Christmas => "christmas",
        }
    }

    pub fn contains(self, phrase: &str) -> bool {
        self.phrases().contains(&phrase)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Theme {
    type Err = HangmanError;

    /// Accepts display names case-insensitively; spaces, hyphens and
    /// underscores are ignored ("native-american", "NATIVE_AMERICAN").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "nativeamerican" => Ok(Theme::NativeAmerican),
            "thanksgiving" => Ok(Theme::Thanksgiving),
            "christmas" => Ok(Theme::Christmas),
            _ => Err(HangmanError::InvalidTheme(s.to_string())),
        }
    }
}
