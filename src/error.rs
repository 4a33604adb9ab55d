//! Error types for Peek.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Peek operations.
#[derive(Error, Debug)]
pub enum PeekError {
    /// Input bytes could not be opened as a database image (malformed file,
    /// engine initialization failure).
    #[error("Load error: {0}")]
    Load(String),

    /// An operation that needs a loaded database was invoked before any
    /// successful load.
    #[error("No database is loaded")]
    NoActiveSession,

    /// Statement failed at parse or execution time. The payload is the
    /// engine's native diagnostic, unmodified.
    #[error("Query error: {0}")]
    Query(String),

    /// Current database state could not be serialized to an image.
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration errors (invalid config file, bad field values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors at the shell boundary (reading/writing images).
    #[error("I/O error: {0}")]
    Io(String),
}

impl PeekError {
    /// Creates a load error with the given message.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates an export error with the given message.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Load(_) => "Load Error",
            Self::NoActiveSession => "No Active Session",
            Self::Query(_) => "Query Error",
            Self::Export(_) => "Export Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using PeekError.
pub type Result<T> = std::result::Result<T, PeekError>;
