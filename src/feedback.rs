//! Feedback patterns for Wordle guesses.
//!
//! This module classifies a guess against a secret word into the
//! gray/yellow/green pattern a player sees, and parses the textual form
//! players type back in.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::letters::ALPHABET_SIZE;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
///
/// Ordered `Gray < Yellow < Green`, matching their digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter not in the word, or all its occurrences already accounted for
    Gray,
    /// Letter in the word but at another position
    Yellow,
    /// Letter at this exact position
    Green,
}

impl Feedback {
    fn digit(self) -> u8 {
        match self {
            Feedback::Gray => 0,
            Feedback::Yellow => 1,
            Feedback::Green => 2,
        }
    }

    fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Feedback::Gray,
            1 => Feedback::Yellow,
            _ => Feedback::Green,
        }
    }

    /// The canonical input symbol (`!`, `?` or `=`).
    pub fn symbol(self) -> char {
        match self {
            Feedback::Gray => '!',
            Feedback::Yellow => '?',
            Feedback::Green => '=',
        }
    }

    /// Convert to a colored square for display
    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Green => '🟩',
            Feedback::Yellow => '🟨',
            Feedback::Gray => '⬛',
        }
    }

    /// Parse a single symbol. Besides `! ? =` this accepts g/y/b(x) and 2/1/0.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '=' | 'g' | '2' => Some(Feedback::Green),
            '?' | 'y' | '1' => Some(Feedback::Yellow),
            '!' | 'b' | 'x' | '0' => Some(Feedback::Gray),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
///
/// Encoded as a single `u8` (0-242): the five feedbacks read as a base-3
/// number with position 0 as the most significant digit. Counting codes
/// upwards therefore enumerates patterns `!!!!!`, `!!!!?`, ... `=====`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// Total number of possible patterns (3^5)
    pub const COUNT: usize = 243;

    pub const ALL_GRAY: Self = Self(0);

    pub const ALL_GREEN: Self = Self(Self::COUNT as u8 - 1);

    /// Create a pattern from individual feedback values
    pub fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback.iter().fold(0, |code, fb| code * 3 + fb.digit()))
    }

    /// The pattern with the given code, if it is below [`Pattern::COUNT`].
    pub fn from_code(code: u8) -> Option<Self> {
        (usize::from(code) < Self::COUNT).then(|| Self(code))
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// Every pattern, in code order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Classify `guess` against `secret`.
    ///
    /// Greens are assigned first and consume their letter from the secret's
    /// inventory. Remaining positions are then scanned left to right: a letter
    /// with unconsumed occurrences left becomes yellow and consumes one,
    /// everything else is gray. Surplus copies of a repeated guess letter are
    /// therefore gray.
    pub fn classify(secret: &Word, guess: &Word) -> Self {
        let secret = secret.letters();
        let guess = guess.letters();

        let mut feedback = [Feedback::Gray; WORD_LENGTH];
        let mut inventory = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                feedback[i] = Feedback::Green;
            } else {
                inventory[usize::from(secret[i] - b'a')] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Green {
                let idx = usize::from(guess[i] - b'a');
                if inventory[idx] > 0 {
                    feedback[i] = Feedback::Yellow;
                    inventory[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// [`Pattern::classify`] on unvalidated text.
    pub fn classify_str(secret: &str, guess: &str) -> Result<Self> {
        Ok(Self::classify(&secret.parse()?, &guess.parse()?))
    }

    /// Convert pattern to array of feedbacks
    pub fn feedback(self) -> [Feedback; WORD_LENGTH] {
        let mut code = self.0;
        let mut feedback = [Feedback::Gray; WORD_LENGTH];
        for fb in feedback.iter_mut().rev() {
            *fb = Feedback::from_digit(code % 3);
            code /= 3;
        }
        feedback
    }

    /// Check if this pattern represents a win (all green)
    pub fn is_solved(self) -> bool {
        self == Self::ALL_GREEN
    }

    /// Display as colored squares
    pub fn to_emoji_string(self) -> String {
        self.feedback().iter().map(|f| f.to_emoji()).collect()
    }
}

impl FromStr for Pattern {
    type Err = WordleError;

    /// Parse a pattern from a string like `"=?!!!"`, `"gybbb"` or `"21000"`.
    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(WordleError::InvalidLength {
                input: s.to_string(),
                expected: WORD_LENGTH,
                found,
            });
        }

        let mut feedback = [Feedback::Gray; WORD_LENGTH];
        for (position, (symbol, fb)) in s.chars().zip(feedback.iter_mut()).enumerate() {
            *fb = Feedback::from_symbol(symbol)
                .ok_or(WordleError::InvalidSymbol { symbol, position })?;
        }
        Ok(Self::new(feedback))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.feedback() {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.to_string())
    }
}
