//! Integration tests for the load command layer.
//!
//! Tests cover:
//! - Database type selection and rejection
//! - End-to-end loads through the command path with the SQLite backend

use sql_loader::cli::commands::load;
use sql_loader::db::PostgresConfig;
use sql_loader::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Connection parameters for tests that never reach PostgreSQL.
fn unused_pg_config() -> PostgresConfig {
    PostgresConfig {
        host: "localhost".to_string(),
        port: 5432,
        database: "postgres".to_string(),
        user: "postgres".to_string(),
        password: String::new(),
    }
}

#[tokio::test]
async fn test_unknown_database_type_is_rejected() {
    let result = load::run(
        Path::new("schema.sql"),
        "mysql",
        ":memory:",
        &unused_pg_config(),
    )
    .await;

    match result {
        Err(Error::UnsupportedDatabase(requested)) => assert_eq!(requested, "mysql"),
        other => panic!("expected UnsupportedDatabase, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_single_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli.db");
    let script = temp_dir.path().join("schema.sql");
    fs::write(
        &script,
        "CREATE TABLE cli_probe (id INTEGER); INSERT INTO cli_probe (id) VALUES (7);",
    )
    .unwrap();

    load::run(
        &script,
        "sqlite",
        db_path.to_str().unwrap(),
        &unused_pg_config(),
    )
    .await
    .unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let id: i64 = conn
        .query_row("SELECT id FROM cli_probe", [], |row| row.get(0))
        .unwrap();
    assert_eq!(id, 7);
}

#[tokio::test]
async fn test_load_directory_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let scripts = temp_dir.path().join("scripts");
    fs::create_dir(&scripts).unwrap();
    let db_path = temp_dir.path().join("cli.db");

    fs::write(
        scripts.join("001_schema.sql"),
        "CREATE TABLE cli_probe (id INTEGER PRIMARY KEY AUTOINCREMENT, step INTEGER);",
    )
    .unwrap();
    fs::write(
        scripts.join("002_data.sql"),
        "INSERT INTO cli_probe (step) VALUES (1); INSERT INTO cli_probe (step) VALUES (2);",
    )
    .unwrap();

    load::run(
        &scripts,
        "sqlite",
        db_path.to_str().unwrap(),
        &unused_pg_config(),
    )
    .await
    .unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM cli_probe", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_load_missing_path_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli.db");

    let result = load::run(
        &temp_dir.path().join("does_not_exist.sql"),
        "sqlite",
        db_path.to_str().unwrap(),
        &unused_pg_config(),
    )
    .await;

    match result {
        Err(Error::PathNotFound(path)) => assert!(path.contains("does_not_exist.sql")),
        other => panic!("expected PathNotFound, got {:?}", other),
    }
}
