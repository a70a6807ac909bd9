//! The match engine
//!
//! A single linear scan over the dictionary, applying the positional,
//! exclusion, and inclusion checks to every word in order. Pure CPU-bound
//! work over immutable data, so the scan parallelizes freely; rayon's
//! collect keeps the original dictionary order.

use crate::core::{Query, Word};
use rayon::prelude::*;

/// The ordered subsequence of the dictionary satisfying a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    words: Vec<&'a Word>,
}

impl<'a> MatchResult<'a> {
    /// The matching words, in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    /// Number of matching words
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Matching words as owned strings (for serialization)
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }
}

/// Find every dictionary word satisfying the query
///
/// Words are checked independently and short-circuit on the first failed
/// check. Output preserves dictionary order; duplicates are kept.
///
/// # Examples
/// ```
/// use wordmatch::core::{Query, Word};
/// use wordmatch::filter::find_matches;
///
/// let dictionary = vec![
///     Word::new("stone").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("steel").unwrap(),
/// ];
/// let query = Query::parse("st___", "", "a").unwrap();
///
/// let result = find_matches(&dictionary, &query);
/// assert_eq!(result.count(), 2);
/// assert_eq!(result.texts(), vec!["stone", "steel"]);
/// ```
#[must_use]
pub fn find_matches<'a>(dictionary: &'a [Word], query: &Query) -> MatchResult<'a> {
    let words = dictionary
        .par_iter()
        .filter(|word| word_matches(word, query))
        .collect();

    MatchResult { words }
}

/// Check one word against all three constraint kinds
fn word_matches(word: &Word, query: &Query) -> bool {
    // Positional check: concrete slots must match exactly
    if !query.pattern().matches(word) {
        return false;
    }

    // Exclusion check: forbidden letters must not appear anywhere
    if query.excluded().iter().any(|letter| word.has_letter(letter)) {
        return false;
    }

    // Inclusion check: required letters must each appear at least once
    query
        .included()
        .iter()
        .all(|letter| word.has_letter(letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    fn query(pattern: &str, included: &str, excluded: &str) -> Query {
        Query::parse(pattern, included, excluded).unwrap()
    }

    #[test]
    fn positional_prefix_match() {
        // Pattern "a____" over four a-words returns all of them
        let dict = dictionary(&["apple", "angle", "amble", "adobe"]);
        let result = find_matches(&dict, &query("a____", "", ""));

        assert_eq!(result.count(), 4);
        assert_eq!(result.texts(), vec!["apple", "angle", "amble", "adobe"]);
    }

    #[test]
    fn inclusion_without_match_is_empty() {
        // No word contains 'z'
        let dict = dictionary(&["apple", "angle", "amble", "adobe"]);
        let result = find_matches(&dict, &query("_____", "z", ""));

        assert_eq!(result.count(), 0);
        assert!(result.texts().is_empty());
    }

    #[test]
    fn prefix_with_exclusion() {
        let dict = dictionary(&["stone", "stain", "steel", "slate", "stack"]);
        let result = find_matches(&dict, &query("st___", "", "a"));

        // Starts with "st" and contains no 'a'
        assert_eq!(result.texts(), vec!["stone", "steel"]);
    }

    #[test]
    fn blank_query_matches_whole_dictionary() {
        let dict = dictionary(&["crane", "slate", "zesty"]);
        let result = find_matches(&dict, &query("_____", "", ""));

        assert_eq!(result.count(), dict.len());
    }

    #[test]
    fn pattern_letter_also_excluded_yields_zero() {
        // Contradictory but well-defined: position 0 fixed to 'a' while 'a'
        // is excluded can never match.
        let dict = dictionary(&["apple", "angle", "adobe"]);
        let result = find_matches(&dict, &query("a____", "", "a"));

        assert_eq!(result.count(), 0);
    }

    #[test]
    fn repeated_included_letters_collapse() {
        // "ll" means "contains l at least once", not twice
        let dict = dictionary(&["label", "lemon", "crane"]);
        let result = find_matches(&dict, &query("_____", "ll", ""));

        assert_eq!(result.texts(), vec!["label", "lemon"]);
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let dict = dictionary(&["slate", "crane", "slate", "amble"]);
        let result = find_matches(&dict, &query("_____", "e", ""));

        assert_eq!(result.texts(), vec!["slate", "crane", "slate", "amble"]);
    }

    #[test]
    fn fully_concrete_pattern_matches_exactly_itself() {
        let dict = dictionary(&["crane", "crate", "slate", "crane"]);

        for word in &dict {
            let q = Query::new(
                crate::core::Pattern::from_word(word),
                LetterSet::empty(),
                LetterSet::empty(),
            )
            .unwrap();

            let result = find_matches(&dict, &q);
            assert!(result.count() >= 1);
            assert!(result.words().iter().all(|w| w.text() == word.text()));
        }
    }

    #[test]
    fn own_letters_as_inclusion_always_match() {
        let dict = dictionary(&["crane", "slate", "speed", "zesty"]);

        for word in &dict {
            let q = Query::new(
                crate::core::Pattern::blank(),
                LetterSet::from_word(word),
                LetterSet::empty(),
            )
            .unwrap();

            let result = find_matches(&dict, &q);
            assert!(
                result.words().iter().any(|w| w.text() == word.text()),
                "'{word}' must match its own letters"
            );
        }
    }

    #[test]
    fn idempotent_for_identical_arguments() {
        let dict = dictionary(&["crane", "slate", "stone", "steel"]);
        let q = query("s____", "e", "r");

        let first = find_matches(&dict, &q);
        let second = find_matches(&dict, &q);
        assert_eq!(first, second);
    }

    #[test]
    fn adding_constraints_never_grows_results() {
        let dict = dictionary(&["crane", "slate", "stone", "steel", "amble"]);

        let base = find_matches(&dict, &query("_____", "e", ""));
        let more_included = find_matches(&dict, &query("_____", "es", ""));
        let more_excluded = find_matches(&dict, &query("_____", "e", "a"));

        assert!(more_included.count() <= base.count());
        assert!(more_excluded.count() <= base.count());

        // And the narrowed sets are subsequences of the base set
        for narrowed in [&more_included, &more_excluded] {
            let base_texts = base.texts();
            assert!(narrowed.texts().iter().all(|w| base_texts.contains(w)));
        }
    }

    #[test]
    fn empty_dictionary_yields_empty_result() {
        let dict: Vec<Word> = Vec::new();
        let result = find_matches(&dict, &query("a____", "b", "c"));
        assert_eq!(result.count(), 0);
    }
}
