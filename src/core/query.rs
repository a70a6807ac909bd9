//! Validated solve queries
//!
//! A `Query` bundles the positional pattern with the inclusion and exclusion
//! letter sets. Validation happens here, once, at the boundary; the filter
//! engine receives only well-formed queries.

use super::{LetterSet, Pattern, PatternError};
use std::fmt;

/// A validated solve request: pattern plus letter constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pattern: Pattern,
    included: LetterSet,
    excluded: LetterSet,
}

/// Error type for malformed queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The pattern string failed to parse
    Pattern(PatternError),
    /// The same letters are both required and forbidden
    Contradiction(LetterSet),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "{err}"),
            Self::Contradiction(overlap) => write!(
                f,
                "Letters cannot be both included and excluded: {overlap}"
            ),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::Contradiction(_) => None,
        }
    }
}

impl From<PatternError> for QueryError {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

impl Query {
    /// Build a query from already-parsed parts
    ///
    /// # Errors
    /// Returns `QueryError::Contradiction` when `included` and `excluded`
    /// overlap - such a query can never match and is rejected up front
    /// rather than silently returning zero results.
    pub fn new(
        pattern: Pattern,
        included: LetterSet,
        excluded: LetterSet,
    ) -> Result<Self, QueryError> {
        if !included.is_disjoint(&excluded) {
            return Err(QueryError::Contradiction(included.intersection(&excluded)));
        }

        Ok(Self {
            pattern,
            included,
            excluded,
        })
    }

    /// Parse and validate a query from raw request strings
    ///
    /// The pattern must be exactly 5 characters (letters or `_`); the letter
    /// sets are parsed leniently, stripping anything outside a-z.
    ///
    /// # Errors
    /// Returns `QueryError` for a malformed pattern or overlapping
    /// included/excluded sets.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Query;
    ///
    /// let query = Query::parse("st___", "", "a").unwrap();
    /// assert_eq!(query.pattern().to_string(), "st___");
    ///
    /// assert!(Query::parse("abcd", "", "").is_err());
    /// assert!(Query::parse("_____", "e", "e").is_err());
    /// ```
    pub fn parse(pattern: &str, included: &str, excluded: &str) -> Result<Self, QueryError> {
        let pattern = Pattern::parse(pattern)?;
        let included = LetterSet::parse(included);
        let excluded = LetterSet::parse(excluded);
        Self::new(pattern, included, excluded)
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn included(&self) -> &LetterSet {
        &self.included
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &LetterSet {
        &self.excluded
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern={} included={} excluded={}",
            self.pattern, self.included, self.excluded
        )
    }
}
