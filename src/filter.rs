//! Candidate filtering.
//!
//! Both filters return a new list and preserve the relative order of the
//! input, so a candidate list stays in dictionary order across rounds.

use crate::feedback::Pattern;
use crate::state::ConstraintState;
use crate::word::Word;

/// Keep the words satisfying every constraint in `state`.
///
/// This is a cheap scan that may keep words the feedback actually rules out
/// (it ignores exact letter counts). Use [`filter_by_pattern`] to decide.
pub fn filter_by_state(words: &[Word], state: &ConstraintState) -> Vec<Word> {
    words.iter().filter(|w| state.matches(w)).copied().collect()
}

/// Keep the words that would have produced exactly `pattern` for `guess`.
pub fn filter_by_pattern(words: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    words
        .iter()
        .filter(|w| Pattern::classify(w, guess) == pattern)
        .copied()
        .collect()
}

