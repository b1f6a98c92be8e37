//! Expected information of a guess.
//!
//! A guess splits the candidates into groups by the pattern each candidate
//! would produce. The expected information is the Shannon entropy of that
//! split, in bits.

use crate::feedback::Pattern;
use crate::word::Word;

/// Number of candidates producing each pattern, indexed by pattern code.
pub fn pattern_counts(candidates: &[Word], guess: &Word) -> [u32; Pattern::COUNT] {
    let mut counts = [0u32; Pattern::COUNT];
    for candidate in candidates {
        counts[usize::from(Pattern::classify(candidate, guess).code())] += 1;
    }
    counts
}

/// Entropy of a split, visiting patterns in code order.
///
/// Empty groups contribute nothing. Returns 0 when `total` is 0.
pub fn information_from_counts(counts: &[u32; Pattern::COUNT], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let mut information = 0.0;
    for &count in counts {
        if count > 0 {
            let p = f64::from(count) / n;
            information += p * (1.0 / p).log2();
        }
    }
    information
}

/// Expected bits of information `guess` yields against `candidates`.
///
/// The result lies in `0..=log2(candidates.len())`. The guess does not need
/// to be a candidate.
pub fn expected_information(candidates: &[Word], guess: &Word) -> f64 {
    information_from_counts(&pattern_counts(candidates, guess), candidates.len())
}

/// Same value as [`expected_information`], computed by scanning the whole
/// candidate list once per possible pattern.
///
/// This is 243 times slower and only useful as a cross-check.
pub fn expected_information_exhaustive(candidates: &[Word], guess: &Word) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let n = candidates.len() as f64;
    let mut information = 0.0;
    for pattern in Pattern::all() {
        let count = candidates
            .iter()
            .filter(|c| Pattern::classify(c, guess) == pattern)
            .count();
        if count != 0 {
            let p = count as f64 / n;
            information += p * (1.0 / p).log2();
        }
    }
    information
}

/// Expected number of candidates left after guessing `guess`.
pub fn expected_remaining(candidates: &[Word], guess: &Word) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = pattern_counts(candidates, guess)
        .iter()
        .map(|&count| f64::from(count) * f64::from(count))
        .sum();
    sum_of_squares / candidates.len() as f64
}
