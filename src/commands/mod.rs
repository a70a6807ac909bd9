//! Command implementations

pub mod query;
pub mod serve;

pub use query::{QueryConfig, run_query};
pub use serve::{ServeConfig, run_serve};
