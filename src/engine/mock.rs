//! Mock engines for testing.
//!
//! Provide in-memory `Engine` implementations with canned behavior so the
//! session core can be exercised without a real database image.

use super::{Engine, ResultSet, Value};
use crate::error::{PeekError, Result};
use crate::schema::TABLE_CATALOG_SQL;
use std::cell::RefCell;

/// An engine that returns predefined results and records every statement it
/// was asked to run.
pub struct MockEngine {
    tables: Vec<String>,
    statements: RefCell<Vec<String>>,
}

impl MockEngine {
    /// Creates a mock engine with an empty catalog.
    pub fn new() -> Self {
        Self::with_tables(&[])
    }

    /// Creates a mock engine whose catalog lists the given tables.
    pub fn with_tables(tables: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            statements: RefCell::new(Vec::new()),
        }
    }

    /// Returns the statements run so far, in order.
    pub fn statements(&self) -> Vec<String> {
        self.statements.borrow().clone()
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MockEngine {
    fn run(&self, sql: &str) -> Result<Option<ResultSet>> {
        self.statements.borrow_mut().push(sql.to_string());

        if sql == TABLE_CATALOG_SQL {
            let rows = self
                .tables
                .iter()
                .map(|name| vec![Value::Text(name.clone())])
                .collect();
            return Ok(Some(ResultSet::with_data(vec!["name".to_string()], rows)));
        }

        if sql.to_uppercase().starts_with("SELECT") {
            // One canned row so result plumbing can be asserted on.
            return Ok(Some(ResultSet::with_data(
                vec!["result".to_string()],
                vec![vec![Value::Text(format!("Mock result for: {sql}"))]],
            )));
        }

        Ok(None)
    }

    fn serialize(&self) -> Result<Vec<u8>> {
        Ok(b"mock-image".to_vec())
    }
}

/// An engine whose every operation fails.
///
/// Useful both for error-path tests and for proving that an operation never
/// reached the engine at all.
pub struct FailingEngine;

impl Engine for FailingEngine {
    fn run(&self, _sql: &str) -> Result<Option<ResultSet>> {
        Err(PeekError::query("mock engine failure"))
    }

    fn serialize(&self) -> Result<Vec<u8>> {
        Err(PeekError::export("mock serialize failure"))
    }
}
