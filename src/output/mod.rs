//! Terminal output formatting

mod display;

pub use display::print_match_result;
