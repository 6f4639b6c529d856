//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the database location can be
//! overridden with the `EMPLOYEE_DATABASE_URL` environment variable so that
//! deployment-specific targets stay out of checked-in files.
//!
//! # Example
//!
//! ```no_run
//! use employee_manager::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::database::{DatabaseConfig, DATABASE_URL_ENV};
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional in the file; missing sections take their
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database connection target.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `EMPLOYEE_DATABASE_URL` override, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.finish()
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Used for the implicit default config location, where having no file
    /// at all is normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::default().finish()
        }
    }

    /// Replace the database URL when `url` is present.
    #[must_use]
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn finish(self) -> Result<Self> {
        let config = self.with_database_url(std::env::var(DATABASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] or [`ConfigError::InvalidValue`]
    /// for the first offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.database.busy_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "busy_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }
}
