//! Word Pattern Solver
//!
//! Finds five-letter words matching a positional pattern plus
//! inclusion/exclusion letter constraints, exposed as a CLI and over a
//! single HTTP endpoint.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmatch::core::{Query, Word};
//! use wordmatch::filter::find_matches;
//!
//! let dictionary = vec![
//!     Word::new("stone").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//!
//! // Words starting with "st" and containing no 'a'
//! let query = Query::parse("st___", "", "a").unwrap();
//! let result = find_matches(&dictionary, &query);
//! assert_eq!(result.texts(), vec!["stone"]);
//! ```

// Core domain types
pub mod core;

// The match engine
pub mod filter;

// The candidate word list
pub mod dictionary;

// HTTP API layer
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
