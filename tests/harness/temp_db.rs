use std::path::{Path, PathBuf};

use employee_manager::adapter::outbound::sqlite::database::connection::connect;
use employee_manager::adapter::outbound::sqlite::SqliteEmployeeStore;
use employee_manager::infrastructure::config::database::DatabaseConfig;
use tempfile::TempDir;

/// Temporary SQLite database file for integration tests.
///
/// The file lives in its own temporary directory, removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("employee-manager-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join("employees.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url(),
            ..DatabaseConfig::default()
        }
    }

    /// Open a fresh connection (migrating on first use) and wrap it in a store.
    pub fn store(&self) -> SqliteEmployeeStore {
        let conn = connect(&self.config()).expect("connect to temp database");
        SqliteEmployeeStore::new(conn)
    }
}
