//! SQL Loader CLI
//!
//! A lean command-line tool for loading SQL scripts into PostgreSQL or
//! SQLite databases.

use clap::Parser;
use sql_loader::cli::{
    args::{Cli, Commands},
    commands::load,
};
use sql_loader::db::PostgresConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Load {
            path,
            db_type,
            host,
            port,
            database,
            user,
            password,
            file,
        } => {
            let pg = PostgresConfig {
                host,
                port,
                database,
                user,
                password,
            };
            load::run(&path, &db_type, &file, &pg).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sql_loader=debug")
    } else {
        EnvFilter::new("sql_loader=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
