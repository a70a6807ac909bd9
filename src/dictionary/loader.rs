//! Dictionary loading
//!
//! Turns newline-delimited text into the candidate word list. Lines that do
//! not normalize to a valid 5-letter word are dropped silently; a malformed
//! entry is expected, a missing file is not.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Each line is trimmed and lowercased, then kept only if it forms a valid
/// 5-letter word. File order and duplicates are preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordmatch::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Convert the embedded string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter_map(|line| Word::new(line).ok())
        .collect()
}
