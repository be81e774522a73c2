//! Load command implementation.
//!
//! Opens the requested database handle, dispatches the target path to the
//! file or directory loader, and closes the handle on the way out.

use crate::core::loader;
use crate::db::{DatabaseHandle, PostgresConfig};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Load SQL file(s) from `path` into the selected database.
pub async fn run(path: &Path, db_type: &str, sqlite_file: &str, pg: &PostgresConfig) -> Result<()> {
    let db = match db_type {
        "postgres" => {
            println!("Connecting to PostgreSQL...");
            let db = DatabaseHandle::connect_postgres(pg).await?;
            println!("{}", "Connected to PostgreSQL".green());
            db
        }
        "sqlite" => {
            println!("Opening SQLite database: {}", sqlite_file);
            let db = DatabaseHandle::open_sqlite(sqlite_file)?;
            println!("{}", "Connected to SQLite".green());
            db
        }
        other => {
            return Err(crate::Error::UnsupportedDatabase(other.to_string()));
        }
    };

    // Close the handle whether or not the load succeeded, then report the
    // first load error.
    let result = dispatch(&db, path).await;

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database handle: {}", e);
    }

    result?;

    println!("{}", "[OK] All SQL files loaded successfully".bold().green());
    Ok(())
}

/// Route the target path to the file or directory loader.
async fn dispatch(db: &DatabaseHandle, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }

    if path.is_file() {
        loader::load_sql_file(db, path).await
    } else if path.is_dir() {
        loader::load_sql_directory(db, path).await
    } else {
        Err(crate::Error::InvalidPath(path.display().to_string()))
    }
}
