//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SQL Loader - Load SQL scripts into a database
#[derive(Parser, Debug)]
#[command(name = "sql-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load SQL file(s) into a database
    Load {
        /// Path to SQL file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Database type (postgres|sqlite)
        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "sqlite")]
        db_type: String,

        /// Database host (for PostgreSQL)
        #[arg(long, value_name = "HOST", default_value = "localhost")]
        host: String,

        /// Database port (for PostgreSQL)
        #[arg(short, long, value_name = "PORT", default_value_t = 5432)]
        port: u16,

        /// Database name (for PostgreSQL)
        #[arg(short, long, value_name = "DATABASE", default_value = "postgres")]
        database: String,

        /// Database user (for PostgreSQL)
        #[arg(short, long, value_name = "USER", default_value = "postgres")]
        user: String,

        /// Database password (for PostgreSQL)
        #[arg(short = 'w', long, value_name = "PASSWORD", default_value = "")]
        password: String,

        /// SQLite database file
        #[arg(short, long, value_name = "FILE", default_value = ":memory:")]
        file: String,
    },
}
