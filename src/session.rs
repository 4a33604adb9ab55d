//! Session state for Peek.
//!
//! The single mutable source of truth for "is there a database, and what
//! does it currently contain/return". A `Session` is an explicitly owned
//! value; every operation takes it by reference, so there is no ambient
//! state and independent sessions can coexist.

use crate::engine::{self, Engine};
use crate::error::{PeekError, Result};
use crate::query::{self, QueryOutcome};
use crate::schema;
use tracing::{debug, info};

/// An open (or not-yet-open) database session.
///
/// Owns the live engine instance exclusively; the byte image only exists at
/// the load and export boundaries. `tables` is recomputed wholesale inside
/// every successful load and nowhere else.
pub struct Session {
    engine: Option<Box<dyn Engine>>,
    tables: Vec<String>,
    last_result: Option<QueryOutcome>,
    last_error: Option<String>,
}

/// What a successful load observed: the freshly introspected table list.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// User table names in engine-catalog order.
    pub tables: Vec<String>,
}

/// The one thing the UI should currently show.
///
/// Only ever one of these at a time, following "most recent operation
/// wins"; superseded results stay retrievable via [`Session::last_result`].
#[derive(Debug)]
pub enum DisplayState<'a> {
    /// Nothing to show yet.
    Nothing,
    /// The most recent operation succeeded with this outcome.
    Outcome(&'a QueryOutcome),
    /// The most recent operation failed with this engine diagnostic.
    Error(&'a str),
}

impl Session {
    /// Creates an empty session with no database loaded.
    pub fn new() -> Self {
        Self {
            engine: None,
            tables: Vec::new(),
            last_result: None,
            last_error: None,
        }
    }

    /// Loads a database from a complete file image, replacing any previous
    /// session state.
    ///
    /// On failure the previous state is left entirely untouched: whatever
    /// was loaded before stays loaded and continues to work.
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<SessionSnapshot> {
        let engine = engine::open(bytes)?;
        self.install(engine)
    }

    /// Loads an already-constructed engine with the same replacement
    /// semantics as [`load_from_bytes`](Self::load_from_bytes).
    pub fn load_with(&mut self, engine: Box<dyn Engine>) -> Result<SessionSnapshot> {
        self.install(engine)
    }

    fn install(&mut self, engine: Box<dyn Engine>) -> Result<SessionSnapshot> {
        // Introspect before replacing anything: a failed load must be a
        // no-op on the session besides surfacing the error.
        let tables = schema::user_tables(engine.as_ref()).map_err(|e| match e {
            PeekError::Query(msg) => PeekError::Load(msg),
            other => other,
        })?;

        self.engine = Some(engine);
        self.tables = tables.clone();
        self.last_result = None;
        self.last_error = None;

        info!(table_count = self.tables.len(), "database loaded");
        Ok(SessionSnapshot { tables })
    }

    /// Returns true once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    /// Returns the table names derived at load time, in engine-catalog
    /// order. Empty when nothing is loaded.
    ///
    /// The list is intentionally not refreshed after schema-mutating
    /// statements; it only changes on a reload.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Executes a single SQL statement against the loaded database.
    ///
    /// Whitespace-only input is a no-op (`Ok(None)`): no engine call, no
    /// state change. On success the outcome replaces `last_result` and
    /// clears `last_error`; on failure `last_error` is set and the prior
    /// `last_result` is retained (superseded for display only).
    pub fn execute(&mut self, sql: &str) -> Result<Option<QueryOutcome>> {
        // Blank input is a no-op even before the first load; the loaded
        // check applies only to statements that would actually run.
        if sql.trim().is_empty() {
            return Ok(None);
        }

        let engine = self.engine.as_deref().ok_or(PeekError::NoActiveSession)?;

        match query::run_statement(engine, sql) {
            Ok(Some(outcome)) => {
                debug!(sql, "statement executed");
                self.last_result = Some(outcome.clone());
                self.last_error = None;
                Ok(Some(outcome))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                if let PeekError::Query(msg) = &e {
                    self.last_error = Some(msg.clone());
                }
                Err(e)
            }
        }
    }

    /// Serializes current database state, including every mutation applied
    /// via [`execute`](Self::execute), to a complete file image.
    ///
    /// Re-serializes on every call; nothing is cached.
    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        let engine = self.engine.as_deref().ok_or(PeekError::NoActiveSession)?;
        engine.serialize()
    }

    /// The outcome of the most recent successful execute, if any.
    ///
    /// Retained even while an error is being displayed.
    pub fn last_result(&self) -> Option<&QueryOutcome> {
        self.last_result.as_ref()
    }

    /// The diagnostic of the most recent failed operation, if it has not
    /// been superseded by a success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Resolves the display rule: most recent operation wins.
    pub fn display(&self) -> DisplayState<'_> {
        // A successful operation clears last_error, so its presence means
        // the most recent operation failed.
        if let Some(err) = &self.last_error {
            DisplayState::Error(err)
        } else if let Some(outcome) = &self.last_result {
            DisplayState::Outcome(outcome)
        } else {
            DisplayState::Nothing
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
