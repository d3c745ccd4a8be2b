//! Common error types for the phone directory

use thiserror::Error;

/// Common result type for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the record store, the import pipeline
/// and the search engine. Every failure is reported synchronously to
/// the caller; nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or empty required field on direct create/update
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import file extension is not a supported spreadsheet format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Spreadsheet payload is unreadable or structurally corrupt
    #[error("Parse error: {0}")]
    Parse(String),

    /// Batch import aborted; zero rows were committed
    #[error("Import failed: {0}")]
    ImportFailed(String),
}
