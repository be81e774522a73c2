//! SQL script loader module.
//!
//! Splits SQL text into statements and executes them sequentially, either
//! for a single file or for every `.sql` file in a directory in ascending
//! filename order.

use crate::db::DatabaseHandle;
use crate::Result;
use std::path::Path;

/// Recognized script extension. Matched case-sensitively against the end of
/// the filename, so `SCHEMA.SQL` is not picked up.
const SQL_EXTENSION: &str = ".sql";

/// Split raw SQL text into executable statements.
///
/// Splits on the ASCII semicolon, trims each fragment, and drops fragments
/// that are empty after trimming. The split is purely lexical: a semicolon
/// inside a string literal, comment, or procedural body also terminates a
/// statement.
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

/// Load and execute a single SQL file.
///
/// Statements run in textual order against the given handle. The first
/// statement the database rejects aborts the file; statements already
/// executed stay applied.
pub async fn load_sql_file(db: &DatabaseHandle, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }

    let sql = std::fs::read_to_string(path)?;

    if sql.trim().is_empty() {
        tracing::warn!("Skipping empty file: {}", path.display());
        return Ok(());
    }

    let statements = split_statements(&sql);

    for statement in statements {
        db.execute(statement)
            .await
            .map_err(|e| crate::Error::Execution {
                path: path.display().to_string(),
                statement: statement.to_string(),
                message: e.to_string(),
            })?;
    }

    tracing::info!("Loaded: {}", path.display());
    Ok(())
}

/// Load and execute all SQL files from a directory.
///
/// Only regular files ending in `.sql` are considered; subdirectories and
/// other entries are ignored, with no recursive descent. Files run in
/// ascending lexicographic filename order, so numeric prefixes give callers
/// an explicit execution sequence. The first failing file aborts the run.
pub async fn load_sql_directory(db: &DatabaseHandle, dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(crate::Error::PathNotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(crate::Error::NotADirectory(dir.display().to_string()));
    }

    let mut sql_files: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(SQL_EXTENSION) {
            sql_files.push(name);
        }
    }

    if sql_files.is_empty() {
        tracing::warn!("No SQL files found in directory: {}", dir.display());
        return Ok(());
    }

    sql_files.sort();

    tracing::info!(
        "Found {} SQL file(s) in {}",
        sql_files.len(),
        dir.display()
    );

    for name in &sql_files {
        load_sql_file(db, &dir.join(name)).await?;
    }

    tracing::info!("Successfully loaded {} file(s)", sql_files.len());
    Ok(())
}
