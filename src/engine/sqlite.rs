//! SQLite engine binding.
//!
//! Provides the `SqliteEngine` struct that implements the `Engine` trait on
//! top of rusqlite. The whole database lives in memory: it is hydrated from
//! a file image with `sqlite3_deserialize` and exported back to an image
//! with `sqlite3_serialize`.

use crate::engine::{Engine, ResultSet, Value};
use crate::error::{PeekError, Result};
use rusqlite::serialize::OwnedData;
use rusqlite::types::ValueRef;
use rusqlite::{ffi, Connection, DatabaseName};
use std::ptr::NonNull;
use tracing::debug;

/// In-memory SQLite database constructed from a file image.
pub struct SqliteEngine {
    conn: Connection,
}

impl SqliteEngine {
    /// Opens an engine over a complete database file image.
    ///
    /// The image is copied into engine-owned memory; the caller's buffer is
    /// not retained. Fails if the bytes are not a database image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut conn =
            Connection::open_in_memory().map_err(|e| PeekError::load(e.to_string()))?;

        let data = copy_to_engine_memory(bytes)?;
        conn.deserialize(DatabaseName::Main, data, false)
            .map_err(|e| PeekError::load(e.to_string()))?;

        // sqlite3_deserialize validates the image lazily; probe the catalog
        // now so a corrupt image fails the load instead of the first
        // statement run against it.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |_row| Ok(()))
            .map_err(|e| PeekError::load(e.to_string()))?;

        debug!(image_len = bytes.len(), "database image loaded");
        Ok(Self { conn })
    }
}

impl Engine for SqliteEngine {
    fn run(&self, sql: &str) -> Result<Option<ResultSet>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| PeekError::query(e.to_string()))?;

        // Statements without a result-set shape (DDL, writes) go through
        // execute; everything else is queried row by row.
        if stmt.column_count() == 0 {
            stmt.execute([])
                .map_err(|e| PeekError::query(e.to_string()))?;
            return Ok(None);
        }

        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = stmt
            .query([])
            .map_err(|e| PeekError::query(e.to_string()))?;

        let mut data = Vec::new();
        while let Some(row) = rows.next().map_err(|e| PeekError::query(e.to_string()))? {
            let mut record = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                let cell = row
                    .get_ref(idx)
                    .map_err(|e| PeekError::query(e.to_string()))?;
                record.push(convert_value(cell));
            }
            data.push(record);
        }

        Ok(Some(ResultSet::with_data(columns, data)))
    }

    fn serialize(&self) -> Result<Vec<u8>> {
        let image = self
            .conn
            .serialize(DatabaseName::Main)
            .map_err(|e| PeekError::export(e.to_string()))?;
        Ok(image.to_vec())
    }
}

/// Converts a single rusqlite cell to our Value type.
fn convert_value(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

/// Copies an image into engine-allocated memory.
///
/// `sqlite3_deserialize` takes ownership of the buffer and later frees it
/// with `sqlite3_free`, so the bytes must live in memory the engine
/// allocated itself.
fn copy_to_engine_memory(bytes: &[u8]) -> Result<OwnedData> {
    // sqlite3_malloc64(0) returns a null pointer; keeping a 1-byte
    // allocation lets the empty image (a valid, empty database) through.
    let size = bytes.len().max(1) as u64;
    unsafe {
        let ptr = ffi::sqlite3_malloc64(size) as *mut u8;
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(PeekError::load("engine allocation failed"));
        };
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.as_ptr(), bytes.len());
        Ok(OwnedData::from_raw_nonnull(ptr, bytes.len()))
    }
}
