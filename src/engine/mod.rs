//! Engine binding for Peek.
//!
//! Provides a trait-based interface to the embedded SQL engine, allowing the
//! session core to be exercised against test doubles as well as the real
//! SQLite binding.

mod mock;
mod sqlite;
mod types;

pub use mock::{FailingEngine, MockEngine};
pub use sqlite::SqliteEngine;
pub use types::{ResultSet, Row, Value};

use crate::error::Result;

/// Trait defining the interface to the embedded SQL engine.
///
/// One engine instance corresponds to one in-memory database. Statement
/// execution mutates the database in place; `serialize` materializes the
/// current state as a file image.
pub trait Engine: Send {
    /// Runs a single SQL statement.
    ///
    /// Returns `Some(ResultSet)` when the statement has a result-set shape
    /// (it may still contain zero rows), `None` when it produces no result
    /// set at all (DDL, writes). Errors carry the engine's native
    /// diagnostic.
    fn run(&self, sql: &str) -> Result<Option<ResultSet>>;

    /// Serializes the current database state to a complete file image.
    fn serialize(&self) -> Result<Vec<u8>>;
}

/// Opens the embedded engine over a database file image.
///
/// This is the central factory function for engine instances; the session
/// goes through it on every load.
pub fn open(bytes: &[u8]) -> Result<Box<dyn Engine>> {
    let engine = SqliteEngine::from_bytes(bytes)?;
    Ok(Box::new(engine))
}
