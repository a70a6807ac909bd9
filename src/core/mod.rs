//! Core domain types for word matching
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear validation rules.

mod letters;
mod pattern;
mod query;
mod word;

pub use letters::LetterSet;
pub use pattern::{Pattern, PatternError};
pub use query::{Query, QueryError};
pub use word::{Word, WordError};
