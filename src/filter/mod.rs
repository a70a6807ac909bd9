//! Word matching engine
//!
//! Applies a validated query to the dictionary in one pass.

mod engine;

pub use engine::{MatchResult, find_matches};
