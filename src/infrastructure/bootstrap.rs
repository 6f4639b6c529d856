//! Infrastructure bootstrap helpers for runtime wiring.

use crate::adapter::outbound::sqlite::database::connection::connect;
use crate::adapter::outbound::sqlite::SqliteEmployeeStore;
use crate::application::roster::Roster;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Roster backed by the SQLite store.
pub type SqliteRoster = Roster<SqliteEmployeeStore>;

/// Open the configured database and wrap it in a roster.
///
/// This is the single point where the process acquires its connection; it
/// is released when the returned roster is dropped.
///
/// # Errors
///
/// Returns [`Error::Connection`](crate::error::Error::Connection) when the
/// database cannot be opened or migrated.
pub fn open_roster(config: &Config) -> Result<SqliteRoster> {
    let conn = connect(&config.database)?;
    Ok(Roster::new(SqliteEmployeeStore::new(conn)))
}
