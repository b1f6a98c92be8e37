//! Accumulated knowledge about the secret word.
//!
//! The state is a coarse summary of every guess applied so far. It is sound
//! (it never rejects a word that the authoritative per-word classifier would
//! accept) but not complete: it forgets exact letter counts, so it is used as
//! a pre-filter and as a summary for the player, never as the final word on
//! which candidates survive.

use std::fmt;

use crate::feedback::{Feedback, Pattern};
use crate::letters::LetterSet;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Constraints learned from feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters that may still occur anywhere (the complement of the globally
    /// banned letters).
    allowed: LetterSet,
    /// Letters known to occur somewhere in the secret.
    required: LetterSet,
    /// Letters not yet excluded at each position.
    position_allowed: [LetterSet; WORD_LENGTH],
    /// Letters known to be at each position.
    position_fixed: [Option<u8>; WORD_LENGTH],
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// The empty state, which every word satisfies.
    pub fn new() -> Self {
        Self {
            allowed: LetterSet::full(),
            required: LetterSet::empty(),
            position_allowed: [LetterSet::full(); WORD_LENGTH],
            position_fixed: [None; WORD_LENGTH],
        }
    }

    /// Update the state with a guess and its feedback.
    ///
    /// A gray letter is only banned everywhere when no other position of the
    /// same guess shows it yellow or green. Otherwise the gray only says the
    /// secret holds no further copy, which here reduces to "not at this
    /// position".
    pub fn apply(&mut self, guess: &Word, pattern: Pattern) {
        let letters = guess.letters();
        let feedback = pattern.feedback();

        let revealed: LetterSet = letters
            .iter()
            .zip(feedback.iter())
            .filter(|&(_, &fb)| fb != Feedback::Gray)
            .map(|(&letter, _)| letter)
            .collect();

        for (i, (&letter, &fb)) in letters.iter().zip(feedback.iter()).enumerate() {
            match fb {
                Feedback::Gray => {
                    if revealed.contains(letter) {
                        self.position_allowed[i].remove(letter);
                    } else {
                        self.allowed.remove(letter);
                    }
                }
                Feedback::Yellow => {
                    self.position_allowed[i].remove(letter);
                    self.required.insert(letter);
                }
                Feedback::Green => {
                    self.position_allowed[i] =
                        self.position_allowed[i].intersect(LetterSet::single(letter));
                    self.position_fixed[i] = Some(letter);
                }
            }
        }
    }

    /// Returns a copy of the state with the guess applied.
    pub fn with(mut self, guess: &Word, pattern: Pattern) -> Self {
        self.apply(guess, pattern);
        self
    }

    /// Check whether a word satisfies every constraint.
    pub fn matches(&self, word: &Word) -> bool {
        let mut present = LetterSet::empty();
        for (i, &letter) in word.letters().iter().enumerate() {
            if !self.allowed.contains(letter) || !self.position_allowed[i].contains(letter) {
                return false;
            }
            if matches!(self.position_fixed[i], Some(fixed) if fixed != letter) {
                return false;
            }
            present.insert(letter);
        }
        self.required.is_subset(present)
    }

    /// True while no feedback has narrowed anything.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new()
    }

    /// False when the constraints already exclude every possible word.
    pub fn is_satisfiable(&self) -> bool {
        let usable: Vec<LetterSet> = self
            .position_allowed
            .iter()
            .map(|&set| set.intersect(self.allowed))
            .collect();
        if usable.iter().any(|set| set.is_empty()) {
            return false;
        }
        let reachable = usable
            .iter()
            .fold(LetterSet::empty(), |acc, &set| acc.union(set));
        self.required.is_subset(reachable) && self.required.len() <= WORD_LENGTH
    }

    /// Letters known to be absent from the secret.
    pub fn banned(&self) -> LetterSet {
        self.allowed.complement()
    }

    pub fn required(&self) -> LetterSet {
        self.required
    }

    pub fn position_allowed(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.position_allowed
    }

    pub fn position_fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.position_fixed
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed: String = self
            .position_fixed
            .iter()
            .map(|fixed| fixed.map_or('_', char::from))
            .collect();
        write!(
            f,
            "fixed: {}  required: [{}]  banned: [{}]",
            fixed,
            self.required,
            self.banned()
        )
    }
}
