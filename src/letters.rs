//! Sets of letters over the 26-letter alphabet, stored as a bitmask.

use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

const ALL_LETTERS: u32 = (1 << ALPHABET_SIZE) - 1;

/// A set of lowercase ASCII letters.
///
/// Letters are passed as ASCII bytes (`b'a'..=b'z'`). Every operation is
/// total over that range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

#[inline]
fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase());
    1 << (letter - b'a')
}

impl LetterSet {
    /// The set containing every letter.
    pub const fn full() -> Self {
        Self(ALL_LETTERS)
    }

    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn single(letter: u8) -> Self {
        Self(bit(letter))
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    pub fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every letter of `self` is also in `other`.
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    /// The letters not in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & ALL_LETTERS)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
