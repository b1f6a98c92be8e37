//! Loading word lists from flat text files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;
use crate::word::Word;

/// Parse a word list with one word per line.
///
/// Blank lines are ignored. Lines that are not five letters, and repeats of
/// an earlier word, are skipped with a warning. Order is preserved.
pub fn parse_dictionary(text: &str) -> Vec<Word> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Word>() {
            Ok(word) if seen.insert(word) => words.push(word),
            Ok(word) => warn!("line {}: duplicate word \"{}\" skipped", number + 1, word),
            Err(err) => warn!("line {}: skipped: {}", number + 1, err),
        }
    }

    words
}

/// Read and parse a word list file.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_dictionary(&text);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
