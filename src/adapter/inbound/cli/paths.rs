//! Path utilities.
//!
//! User-level files live under `~/.employee-manager/`:
//! - `~/.employee-manager/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the application home directory (`~/.employee-manager/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".employee-manager")
}

/// Returns the default config file path (`~/.employee-manager/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lives_under_home_dir() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert_eq!(config.file_name().unwrap(), "config.toml");
    }
}
