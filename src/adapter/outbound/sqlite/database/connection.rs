//! Database connection management using Diesel ORM.
//!
//! The process holds exactly one SQLite connection. It is opened here,
//! configured, migrated, and then handed to the store that owns it.

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::infrastructure::config::database::DatabaseConfig;

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open a connection to the given database URL.
///
/// # Errors
/// Returns [`Error::Connection`] if the database cannot be opened.
pub fn establish(database_url: &str) -> Result<SqliteConnection> {
    SqliteConnection::establish(database_url).map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(count = applied.len(), "migrations applied");
    Ok(())
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection, busy_timeout_ms: u32) -> Result<()> {
    diesel::sql_query(format!("PRAGMA busy_timeout={busy_timeout_ms}"))
        .execute(conn)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// Open, configure, and migrate the connection described by `config`.
///
/// # Errors
/// Returns [`Error::Connection`] when the database is unreachable or its
/// schema cannot be brought up to date.
pub fn connect(config: &DatabaseConfig) -> Result<SqliteConnection> {
    let mut conn = establish(&config.url)?;
    configure_sqlite_connection(&mut conn, config.busy_timeout_ms)?;
    run_migrations(&mut conn)?;
    info!(database = %config.url, "database connected");
    Ok(conn)
}
