//! One-shot query command
//!
//! Runs a single query against the dictionary and prints the matches,
//! either as a colored terminal listing or as the same JSON payload the
//! HTTP endpoint returns.

use anyhow::Result;

use crate::core::{Query, Word};
use crate::filter::find_matches;
use crate::output::print_match_result;
use crate::server::SolveResponse;

/// Configuration for the query command
pub struct QueryConfig {
    pub pattern: String,
    pub included: String,
    pub excluded: String,
    pub json: bool,
}

/// Solve one query and print the result
///
/// # Errors
///
/// Returns an error for a malformed pattern or contradictory letter sets.
pub fn run_query(config: &QueryConfig, dictionary: &[Word]) -> Result<()> {
    let query = Query::parse(&config.pattern, &config.included, &config.excluded)?;
    let result = find_matches(dictionary, &query);

    tracing::debug!(%query, count = result.count(), "solved");

    if config.json {
        let response = SolveResponse {
            count: result.count(),
            words: result.texts(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_match_result(&query, &result);
    }

    Ok(())
}
