use std::fmt;

/// Character shown for a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '-';

/// One position of the target phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Separator (space) that is visible from the start.
    Fixed(char),
    Hidden(char),
    Revealed(char),
}

impl Slot {
    fn display(self) -> char {
        match self {
            Slot::Fixed(c) | Slot::Revealed(c) => c,
            Slot::Hidden(_) => PLACEHOLDER,
        }
    }
}

/// Player's progress on the target phrase, tracked per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    slots: Vec<Slot>,
}

impl RevealedPattern {
    /// Everything hidden except non-letters.
    pub fn new(phrase: &str) -> Self {
        let slots = phrase
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { Slot::Hidden(c) } else { Slot::Fixed(c) })
            .collect();
        Self { slots }
    }

    /// Reveals every hidden occurrence of `letter`, returning how many
    /// positions flipped.
    pub fn reveal(&mut self, letter: char) -> usize {
        let mut count = 0;
        for slot in &mut self.slots {
            if let Slot::Hidden(c) = *slot {
                if c == letter {
                    *slot = Slot::Revealed(c);
                    count += 1;
                }
            }
        }
        count
    }

    pub fn is_revealed(&self, letter: char) -> bool {
        self.slots.iter().any(|s| *s == Slot::Revealed(letter))
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.iter().any(|s| matches!(s, Slot::Hidden(_)))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.display())?;
        }
        Ok(())
    }
}
