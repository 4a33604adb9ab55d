//! Schema introspection for Peek.
//!
//! Derives the list of user-visible table names from a loaded database via
//! the engine's catalog.

use crate::engine::{Engine, Value};
use crate::error::Result;

/// The one fixed catalog query issued against the engine.
///
/// Names come back in engine-catalog order (creation order); they are not
/// re-sorted anywhere.
pub const TABLE_CATALOG_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table'";

/// Returns the ordered list of table names in the loaded database.
///
/// An empty database yields an empty list, not an error.
pub fn user_tables(engine: &dyn Engine) -> Result<Vec<String>> {
    let Some(set) = engine.run(TABLE_CATALOG_SQL)? else {
        return Ok(Vec::new());
    };

    Ok(set
        .rows
        .into_iter()
        .filter_map(|mut row| match row.pop() {
            Some(Value::Text(name)) => Some(name),
            _ => None,
        })
        .collect())
}
