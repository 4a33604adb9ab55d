//! Query execution for Peek.

mod executor;

pub use executor::{run_statement, QueryOutcome};
