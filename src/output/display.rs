//! Display functions for query results

use crate::core::Query;
use crate::filter::MatchResult;
use colored::Colorize;

/// Words per row in the match grid
const GRID_COLUMNS: usize = 8;

/// Print the matches for a query as a terminal listing
pub fn print_match_result(query: &Query, result: &MatchResult<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Query: {}", query.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.count() == 0 {
        println!("\n{}", "No matching words".red().bold());
        return;
    }

    println!(
        "\n{} matching {}:\n",
        result.count().to_string().green().bold(),
        if result.count() == 1 { "word" } else { "words" }
    );

    for chunk in result.words().chunks(GRID_COLUMNS) {
        let row = chunk
            .iter()
            .map(|word| word.text())
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {row}");
    }
    println!();
}
