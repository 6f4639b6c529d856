//! Database connection configuration.

use serde::Deserialize;

/// Environment variable that overrides [`DatabaseConfig::url`].
pub const DATABASE_URL_ENV: &str = "EMPLOYEE_DATABASE_URL";

/// Where the employee table lives and how the connection behaves.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite database path, or `:memory:` for a throwaway database.
    #[serde(default = "default_url")]
    pub url: String,
    /// How long a statement waits on a locked database (milliseconds).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

fn default_url() -> String {
    "employees.db".to_string()
}

const fn default_busy_timeout_ms() -> u32 {
    5000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}
