//! The candidate word list
//!
//! Provides the embedded default dictionary compiled into the binary and the
//! dispatch between it and a user-supplied word list file. The dictionary is
//! built once at startup and never mutated afterwards.

mod embedded;
pub mod loader;

use crate::core::Word;
use anyhow::Context;

pub use embedded::{WORDS, WORDS_COUNT};

/// Wordlist source selector used by the `-w/--wordlist` flag
pub const EMBEDDED: &str = "embedded";

/// Load the dictionary from the selected source
///
/// `"embedded"` uses the compiled-in list; anything else is treated as a
/// file path. A missing or unreadable file is a startup error - the caller
/// must not begin serving without a dictionary.
///
/// # Errors
/// Returns an error if a file source cannot be read.
pub fn load(source: &str) -> anyhow::Result<Vec<Word>> {
    if source == EMBEDDED {
        Ok(loader::words_from_slice(WORDS))
    } else {
        loader::load_from_file(source)
            .with_context(|| format!("Failed to load wordlist from '{source}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_sorted() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] <= pair[1], "'{}' out of order", pair[1]);
        }
    }

    #[test]
    fn load_embedded() {
        let words = load(EMBEDDED).unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load("/no/such/wordlist.txt").is_err());
    }
}
