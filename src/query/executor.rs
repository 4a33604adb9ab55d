//! Statement execution and outcome classification.
//!
//! Runs exactly one statement against the engine and classifies the result
//! in isolation from session state, so the rules can be tested without a
//! full session.

use crate::engine::{Engine, ResultSet};
use crate::error::Result;

/// Classified outcome of a successfully executed statement.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// The statement produced rows.
    Rows(ResultSet),

    /// The statement executed but produced no results. Zero-row SELECTs and
    /// non-row-producing statements (DDL, writes) are deliberately not
    /// distinguished.
    Empty,
}

impl QueryOutcome {
    /// Returns the result set, if the outcome carries one.
    pub fn rows(&self) -> Option<&ResultSet> {
        match self {
            Self::Rows(set) => Some(set),
            Self::Empty => None,
        }
    }
}

/// Runs a single statement and classifies the outcome.
///
/// Input is trimmed first; whitespace-only input is skipped entirely
/// (`Ok(None)`) without touching the engine. Engine failures pass through
/// with the native diagnostic intact.
pub fn run_statement(engine: &dyn Engine, sql: &str) -> Result<Option<QueryOutcome>> {
    let sql = sql.trim();
    if sql.is_empty() {
        return Ok(None);
    }

    let outcome = match engine.run(sql)? {
        Some(set) if !set.is_empty() => QueryOutcome::Rows(set),
        _ => QueryOutcome::Empty,
    };

    Ok(Some(outcome))
}
