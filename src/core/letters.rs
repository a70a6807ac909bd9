//! Letter constraint sets
//!
//! A `LetterSet` holds a set of a-z letters as a 26-bit mask. Parsing is
//! lenient: non-letter characters are stripped and duplicates collapse,
//! matching how free-text constraint input is normalized at the boundary.

use super::Word;
use std::fmt;

/// A set of lowercase letters a-z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set (no constraint)
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Parse a set from free-form text
    ///
    /// ASCII letters are kept (case-normalized), everything else is dropped,
    /// and repeated letters collapse to one membership.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::LetterSet;
    ///
    /// let set = LetterSet::parse("a, L-l E");
    /// assert_eq!(set.to_string(), "ael");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut set = Self::empty();
        for ch in text.chars() {
            if ch.is_ascii_alphabetic() {
                set.insert(ch.to_ascii_lowercase() as u8);
            }
        }
        set
    }

    /// Build a set from the letters of a word
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut set = Self::empty();
        for &letter in word.chars() {
            set.insert(letter);
        }
        set
    }

    fn insert(&mut self, letter: u8) {
        debug_assert!(letter.is_ascii_lowercase());
        self.0 |= 1 << (letter - b'a');
    }

    /// Check membership of a lowercase letter
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Whether the set imposes no constraint
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the two sets share no letters
    #[inline]
    #[must_use]
    pub const fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }

    /// The letters present in both sets
    #[must_use]
    pub const fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let bits = self.0;
        (b'a'..=b'z').filter(move |letter| bits & (1 << (letter - b'a')) != 0)
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
