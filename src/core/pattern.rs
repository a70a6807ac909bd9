//! Positional letter pattern
//!
//! A pattern encodes what is known about each of the five positions of the
//! target word: either a concrete lowercase letter or a wildcard (`_`) with
//! no positional constraint.

use super::Word;
use std::fmt;

/// A 5-slot positional pattern
///
/// Each slot is `Some(letter)` for a known position or `None` for a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern([Option<u8>; 5]);

/// Error type for malformed pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must be exactly 5 characters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Pattern may only contain letters and '_', got '{ch}'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern from a string like `"a___e"` or `"CR__E"`
    ///
    /// Accepts exactly 5 characters, each an ASCII letter (normalized to
    /// lowercase) or `'_'` for a wildcard slot.
    ///
    /// # Errors
    /// Returns `PatternError` if the string is not exactly 5 characters or
    /// contains anything other than ASCII letters and `'_'`.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Pattern;
    ///
    /// let pattern = Pattern::parse("a___e").unwrap();
    /// assert_eq!(pattern.to_string(), "a___e");
    ///
    /// assert!(Pattern::parse("abcd").is_err());
    /// assert!(Pattern::parse("ab?de").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut slots = [None; 5];
        for (i, ch) in chars.into_iter().enumerate() {
            slots[i] = match ch {
                '_' => None,
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
                other => return Err(PatternError::InvalidCharacter(other)),
            };
        }

        Ok(Self(slots))
    }

    /// A pattern with all five slots wild
    #[must_use]
    pub const fn blank() -> Self {
        Self([None; 5])
    }

    /// Build a fully-concrete pattern from a word (no wildcards)
    #[must_use]
    pub const fn from_word(word: &Word) -> Self {
        let chars = word.chars();
        Self([
            Some(chars[0]),
            Some(chars[1]),
            Some(chars[2]),
            Some(chars[3]),
            Some(chars[4]),
        ])
    }

    /// Get the slot at a position: `Some(letter)` or `None` for a wildcard
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// Check whether every slot is a wildcard
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Check whether a word satisfies every concrete slot
    ///
    /// Wildcard slots impose no constraint.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("cr___").unwrap();
    /// assert!(pattern.matches(&Word::new("crane").unwrap()));
    /// assert!(!pattern.matches(&Word::new("slate").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, slot)| match slot {
                Some(letter) => word.char_at(i) == *letter,
                None => true,
            })
    }

    /// Iterate over the concrete letters in the pattern
    pub fn known_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().filter_map(|slot| *slot)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_parse_valid() {
        let pattern = Pattern::parse("a___e").unwrap();
        assert_eq!(pattern.slot(0), Some(b'a'));
        assert_eq!(pattern.slot(1), None);
        assert_eq!(pattern.slot(2), None);
        assert_eq!(pattern.slot(3), None);
        assert_eq!(pattern.slot(4), Some(b'e'));
    }

    #[test]
    fn pattern_parse_uppercase_normalized() {
        let p1 = Pattern::parse("CR__E").unwrap();
        let p2 = Pattern::parse("cr__e").unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn pattern_parse_invalid_length() {
        assert!(matches!(
            Pattern::parse("abcd"),
            Err(PatternError::InvalidLength(4))
        ));
        assert!(matches!(
            Pattern::parse("abcdef"),
            Err(PatternError::InvalidLength(6))
        ));
        assert!(matches!(
            Pattern::parse(""),
            Err(PatternError::InvalidLength(0))
        ));
    }

    #[test]
    fn pattern_parse_invalid_character() {
        assert!(matches!(
            Pattern::parse("ab?de"),
            Err(PatternError::InvalidCharacter('?'))
        ));
        assert!(matches!(
            Pattern::parse("ab3de"),
            Err(PatternError::InvalidCharacter('3'))
        ));
        assert!(matches!(
            Pattern::parse("ab de"),
            Err(PatternError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn pattern_blank_matches_everything() {
        let pattern = Pattern::blank();
        assert!(pattern.is_blank());

        for text in ["crane", "slate", "zesty", "aaaaa"] {
            let word = Word::new(text).unwrap();
            assert!(pattern.matches(&word));
        }
    }

    #[test]
    fn pattern_all_wildcards_parses_as_blank() {
        let pattern = Pattern::parse("_____").unwrap();
        assert_eq!(pattern, Pattern::blank());
    }

    #[test]
    fn pattern_from_word_matches_only_that_word() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::from_word(&word);

        assert!(!pattern.is_blank());
        assert!(pattern.matches(&word));
        assert!(!pattern.matches(&Word::new("crate").unwrap()));
        assert!(!pattern.matches(&Word::new("slate").unwrap()));
    }

    #[test]
    fn pattern_positional_match() {
        let pattern = Pattern::parse("_r_n_").unwrap();
        assert!(pattern.matches(&Word::new("crane").unwrap()));
        assert!(pattern.matches(&Word::new("brand").unwrap()));
        assert!(!pattern.matches(&Word::new("carve").unwrap()));
    }

    #[test]
    fn pattern_known_letters() {
        let pattern = Pattern::parse("a_c_e").unwrap();
        let letters: Vec<u8> = pattern.known_letters().collect();
        assert_eq!(letters, vec![b'a', b'c', b'e']);

        assert_eq!(Pattern::blank().known_letters().count(), 0);
    }

    #[test]
    fn pattern_display_roundtrip() {
        for text in ["a___e", "_____", "crane", "_r_n_"] {
            let pattern = Pattern::parse(text).unwrap();
            assert_eq!(pattern.to_string(), text);
        }
    }
}
