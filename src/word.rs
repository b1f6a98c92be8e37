//! Five-letter words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordleError};
use crate::WORD_LENGTH;

/// A word of exactly five lowercase ASCII letters.
///
/// Construction validates the input, so every `Word` can be used directly as
/// an index into 26-letter tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Builds a word from raw letters.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self> {
        for (position, &letter) in letters.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(WordleError::InvalidLetter {
                    letter: letter as char,
                    position,
                });
            }
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> [u8; WORD_LENGTH] {
        self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Number of times `letter` occurs in the word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(WordleError::InvalidLength {
                input: s.to_string(),
                expected: WORD_LENGTH,
                found,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (position, (c, slot)) in s.chars().zip(letters.iter_mut()).enumerate() {
            let c = c.to_ascii_lowercase();
            if !c.is_ascii_lowercase() {
                return Err(WordleError::InvalidLetter {
                    letter: c,
                    position,
                });
            }
            *slot = c as u8;
        }
        Ok(Self(letters))
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}
