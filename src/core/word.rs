//! Dictionary word representation
//!
//! A Word is exactly five lowercase ASCII letters. Alongside the text it
//! keeps a byte view for positional checks and a letter set for O(1)
//! containment checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// A validated 5-letter dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; 5],
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NotAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NotAlphabetic => write!(f, "Word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing case
    ///
    /// # Errors
    /// Returns `WordError` unless the input is exactly 5 ASCII alphabetic
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Word;
    ///
    /// let word = Word::new("Slate").unwrap();
    /// assert_eq!(word.text(), "slate");
    ///
    /// assert!(Word::new("slat").is_err());
    /// assert!(Word::new("sl4te").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != 5 {
            return Err(WordError::InvalidLength(length));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NotAlphabetic);
        }

        // All-ASCII is guaranteed by the byte check, so this cannot fail
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::NotAlphabetic)?;

        Ok(Self {
            letters: chars.iter().copied().collect(),
            text,
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
