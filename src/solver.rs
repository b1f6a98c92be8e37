//! Ranking guesses and narrowing candidates round by round.
//!
//! Each round scores every remaining candidate by its expected information
//! against the remaining candidates, ranks them, and waits for the feedback
//! of the guess the player actually made. The free functions [`round`] and
//! [`advance`] are the whole protocol; [`Solver`] keeps the values they pass
//! around for an interactive session.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entropy::expected_information;
use crate::error::{Result, WordleError};
use crate::feedback::Pattern;
use crate::filter::{filter_by_pattern, filter_by_state};
use crate::state::ConstraintState;
use crate::word::Word;

/// How many guesses to recommend by default.
pub const DEFAULT_TOP: usize = 10;

/// A word with its expected information in bits.
///
/// The score is only meaningful for the candidate set it was computed
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub word: Word,
    pub information: f64,
}

/// Scored words, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<Scored>,
}

impl Ranking {
    /// Sort scores descending. The sort is stable, so equal scores keep the
    /// order they were given in.
    pub fn new(mut scores: Vec<Scored>) -> Self {
        scores.sort_by(|a, b| b.information.total_cmp(&a.information));
        Self { entries: scores }
    }

    pub fn entries(&self) -> &[Scored] {
        &self.entries
    }

    /// The best `k` entries, or all of them if there are fewer.
    pub fn top(&self, k: usize) -> &[Scored] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn best(&self) -> Option<&Scored> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Score every candidate against the whole candidate list.
///
/// Candidates are scored in parallel; the result is in input order.
pub fn score_all(candidates: &[Word]) -> Vec<Scored> {
    candidates
        .par_iter()
        .map(|word| Scored {
            word: *word,
            information: expected_information(candidates, word),
        })
        .collect()
}

/// Scores of the unfiltered dictionary, in dictionary order.
///
/// This is the expensive first round and the list a score cache stores.
pub fn initial_scores(dictionary: &[Word]) -> Vec<Scored> {
    let start = Instant::now();
    let scores = score_all(dictionary);
    info!(
        "scored {} dictionary words in {:.2?}",
        dictionary.len(),
        start.elapsed()
    );
    scores
}

/// Rank the candidates that satisfy `state`.
pub fn round(candidates: &[Word], state: &ConstraintState) -> Ranking {
    let pool = filter_by_state(candidates, state);
    if pool.len() != candidates.len() {
        debug!(
            "{} of {} candidates violate the constraints, skipping them",
            candidates.len() - pool.len(),
            candidates.len()
        );
    }

    let start = Instant::now();
    let ranking = Ranking::new(score_all(&pool));
    debug!("ranked {} candidates in {:.2?}", pool.len(), start.elapsed());
    ranking
}

/// Apply the feedback for `guess` and return the surviving candidates with
/// the updated state.
///
/// The state pre-filters cheaply; the surviving words are then checked
/// against the exact pattern. Fails with [`WordleError::Contradiction`] when
/// nothing survives.
pub fn advance(
    candidates: &[Word],
    state: &ConstraintState,
    guess: &Word,
    pattern: Pattern,
) -> Result<(Vec<Word>, ConstraintState)> {
    let state = state.with(guess, pattern);
    let narrowed = filter_by_state(candidates, &state);
    let remaining = filter_by_pattern(&narrowed, guess, pattern);
    debug!(
        "{} {}: {} candidates -> {} by constraints -> {} by pattern",
        guess,
        pattern,
        candidates.len(),
        narrowed.len(),
        remaining.len()
    );

    if remaining.is_empty() {
        return Err(WordleError::Contradiction {
            guess: *guess,
            pattern,
        });
    }
    Ok((remaining, state))
}

/// Where a session stands after the latest feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// More than one candidate remains.
    InProgress { remaining: usize },
    /// Exactly one word is consistent with the feedback.
    Solved(Word),
    /// No word is consistent with the feedback.
    Contradiction,
}

impl Status {
    /// True once no more feedback can narrow the candidates.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

/// A solving session over one dictionary.
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    state: ConstraintState,
    history: Vec<(Word, Pattern)>,
    initial: Option<Ranking>,
    /// Ranking of the current round, computed on first use.
    ranked: OnceCell<Ranking>,
}

impl Solver {
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self {
            candidates: dictionary.clone(),
            dictionary,
            state: ConstraintState::new(),
            history: Vec::new(),
            initial: None,
            ranked: OnceCell::new(),
        }
    }

    /// Use precomputed first-round scores instead of scoring the dictionary.
    ///
    /// The scores must cover exactly the dictionary's words, in any order.
    pub fn with_initial_scores(mut self, scores: Vec<Scored>) -> Result<Self> {
        if scores.len() != self.dictionary.len() {
            return Err(WordleError::CacheMismatch);
        }
        let lookup: HashMap<Word, f64> = scores
            .into_iter()
            .map(|scored| (scored.word, scored.information))
            .collect();
        let ordered = self
            .dictionary
            .iter()
            .map(|word| {
                lookup.get(word).map(|&information| Scored {
                    word: *word,
                    information,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(WordleError::CacheMismatch)?;

        info!("using {} precomputed scores", ordered.len());
        self.initial = Some(Ranking::new(ordered));
        self.ranked = OnceCell::new();
        Ok(self)
    }

    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Rank the remaining candidates.
    ///
    /// The ranking is scored once per round and reused until the next
    /// [`advance`](Self::advance) or [`reset`](Self::reset).
    pub fn ranking(&self) -> &Ranking {
        self.ranked.get_or_init(|| match &self.initial {
            Some(initial) if self.history.is_empty() => initial.clone(),
            _ => round(&self.candidates, &self.state),
        })
    }

    pub fn top(&self, k: usize) -> Vec<Scored> {
        self.ranking().top(k).to_vec()
    }

    /// Record the feedback for a guess and narrow the candidates.
    ///
    /// Inconsistent feedback empties the candidate set; the session then
    /// reports [`Status::Contradiction`] until [`reset`](Self::reset).
    pub fn advance(&mut self, guess: &Word, pattern: Pattern) -> Status {
        let (candidates, state) = advance(&self.candidates, &self.state, guess, pattern)
            .unwrap_or_else(|err| {
                warn!("{}", err);
                (Vec::new(), self.state.with(guess, pattern))
            });
        self.candidates = candidates;
        self.state = state;
        self.history.push((*guess, pattern));
        self.ranked = OnceCell::new();
        self.status()
    }

    pub fn status(&self) -> Status {
        match self.candidates.as_slice() {
            [] => Status::Contradiction,
            [word] => Status::Solved(*word),
            words => Status::InProgress {
                remaining: words.len(),
            },
        }
    }

    /// Start over with the full dictionary.
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.clone();
        self.state = ConstraintState::new();
        self.history.clear();
        self.ranked = OnceCell::new();
    }

    /// Play a game, always guessing the best-ranked candidate, with feedback
    /// supplied by `get_feedback`. Returns the guesses made.
    ///
    /// Every unsolved round eliminates at least the guessed word, so this
    /// stops after at most one guess per dictionary word.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Vec<(Word, Pattern)>
    where
        F: FnMut(&Word) -> Pattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..self.dictionary.len() {
            let guess = match self.status() {
                Status::InProgress { .. } => match self.ranking().best() {
                    Some(best) => best.word,
                    None => break,
                },
                Status::Solved(word) => word,
                Status::Contradiction => break,
            };

            let pattern = get_feedback(&guess);
            guesses.push((guess, pattern));

            if pattern.is_solved() {
                break;
            }

            self.advance(&guess, pattern);
        }

        guesses
    }

    /// Solve a puzzle knowing the target word (for testing)
    pub fn solve_for(&mut self, target: &Word) -> Vec<(Word, Pattern)> {
        self.solve_with_feedback(|guess| Pattern::classify(target, guess))
    }
}
