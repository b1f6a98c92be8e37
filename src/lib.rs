//! # Wordle Helper
//!
//! Recommends Wordle guesses by expected information gain.
//!
//! After every guess the player reports the feedback pattern, the candidate
//! words are narrowed to those consistent with it, and the survivors are
//! ranked again by how many bits of information guessing them is expected
//! to reveal.

pub mod cache;
pub mod command;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod letters;
pub mod solver;
pub mod state;
pub mod word;

pub use error::{Result, WordleError};
pub use feedback::{Feedback, Pattern};
pub use letters::LetterSet;
pub use solver::{advance, round, Ranking, Scored, Solver, Status, DEFAULT_TOP};
pub use state::ConstraintState;
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
