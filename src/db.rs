//! Database handle abstraction.
//!
//! Wraps the two supported backends behind a single execute capability so
//! the loader never branches on backend shape. Opening and closing a handle
//! is the CLI layer's job; the loaders only borrow it.

use crate::Result;
use rusqlite::Connection;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, warn};

/// PostgreSQL connection parameters, filled from CLI flags.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl PostgresConfig {
    /// Build a libpq-style connection string.
    fn connection_string(&self) -> String {
        let mut config = format!(
            "host={} port={} user={} dbname={}",
            self.host, self.port, self.user, self.database
        );
        if !self.password.is_empty() {
            config.push_str(&format!(" password={}", self.password));
        }
        config
    }
}

/// A pre-opened database connection, one variant per supported backend.
pub enum DatabaseHandle {
    /// Embedded file-backed (or in-memory) SQLite database.
    Sqlite(Connection),
    /// Client connection to a running PostgreSQL server.
    Postgres(Client),
}

impl DatabaseHandle {
    /// Open an embedded SQLite database.
    ///
    /// The literal path `:memory:` opens a transient in-memory database;
    /// any other path opens (or creates) the file.
    pub fn open_sqlite(file: &str) -> Result<Self> {
        let conn = if file == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(file)?
        };
        debug!("opened SQLite database: {}", file);
        Ok(DatabaseHandle::Sqlite(conn))
    }

    /// Connect to a PostgreSQL server.
    ///
    /// Spawns the connection driver task; driver errors surface as warnings
    /// rather than panics since they usually just mean the server went away.
    pub async fn connect_postgres(config: &PostgresConfig) -> Result<Self> {
        let (client, connection) =
            tokio_postgres::connect(&config.connection_string(), NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "PostgreSQL connection error");
            }
        });

        debug!(
            "connected to PostgreSQL at {}:{}",
            config.host, config.port
        );
        Ok(DatabaseHandle::Postgres(client))
    }

    /// Execute a single SQL statement.
    ///
    /// SQLite statements are prepared and run; PostgreSQL statements go
    /// through the simple query protocol, matching a parameterless query.
    pub async fn execute(&self, statement: &str) -> Result<()> {
        match self {
            DatabaseHandle::Sqlite(conn) => {
                conn.prepare(statement)?.execute([])?;
                Ok(())
            }
            DatabaseHandle::Postgres(client) => {
                client.simple_query(statement).await?;
                Ok(())
            }
        }
    }

    /// Close the handle.
    ///
    /// SQLite reports close failures; dropping the PostgreSQL client ends
    /// its connection once the driver task drains.
    pub async fn close(self) -> Result<()> {
        match self {
            DatabaseHandle::Sqlite(conn) => {
                conn.close().map_err(|(_, e)| e)?;
            }
            DatabaseHandle::Postgres(client) => {
                drop(client);
            }
        }
        Ok(())
    }
}
