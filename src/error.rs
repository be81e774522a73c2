//! Error types for the SQL loader.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SQL loader.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // Execution errors
    #[error("Error executing statement in {path}: {message}")]
    Execution {
        /// Path of the SQL source the statement came from.
        path: String,
        /// The statement the database rejected.
        statement: String,
        /// The database's own error message.
        message: String,
    },

    // Configuration errors
    #[error("Unsupported database type: {0}")]
    UnsupportedDatabase(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Database client errors
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
