//! Errors produced while parsing input, filtering candidates and handling
//! the score cache.

use thiserror::Error;

use crate::feedback::Pattern;
use crate::word::Word;

/// The errors that `wordle_helper` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or pattern does not have exactly five symbols.
    #[error("\"{input}\" has {found} symbols, expected {expected}")]
    InvalidLength {
        input: String,
        expected: usize,
        found: usize,
    },

    /// A pattern contains a character that is not a feedback symbol.
    #[error("invalid feedback symbol {symbol:?} at position {position} (use ! ? =)")]
    InvalidSymbol { symbol: char, position: usize },

    /// A word contains a character outside `a`-`z`.
    #[error("invalid letter {letter:?} at position {position}, words use a-z only")]
    InvalidLetter { letter: char, position: usize },

    /// Applying the feedback left no candidate. The feedback given across
    /// rounds is inconsistent.
    #[error("no candidate matches feedback {pattern} for guess \"{guess}\"")]
    Contradiction { guess: Word, pattern: Pattern },

    /// The precomputed scores were built from a different dictionary.
    #[error("score cache does not match the loaded dictionary")]
    CacheMismatch,

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing or deserializing scores")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;
