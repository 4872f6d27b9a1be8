//! Path management for rolodex-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `ROLODEX_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rolodex-cli` or `~/.config/rolodex-cli`
//! 3. Windows: `%APPDATA%\rolodex-cli`

use std::path::PathBuf;

use crate::error::RolodexError;

/// Manages all paths used by rolodex-cli
#[derive(Debug, Clone)]
pub struct RolodexPaths {
    /// Base directory for all rolodex data
    base_dir: PathBuf,
}

impl RolodexPaths {
    /// Create a new RolodexPaths instance
    ///
    /// Path resolution:
    /// 1. `ROLODEX_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/rolodex-cli` or `~/.config/rolodex-cli`
    /// 3. Windows: `%APPDATA%\rolodex-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RolodexError> {
        let base_dir = if let Ok(custom) = std::env::var("ROLODEX_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RolodexPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/rolodex-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/rolodex-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the address book file
    pub fn book_file(&self) -> PathBuf {
        self.data_dir().join("addressbook.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), RolodexError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RolodexError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RolodexError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RolodexError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("rolodex-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RolodexError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RolodexError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rolodex-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RolodexPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RolodexPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RolodexPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.book_file(),
            temp_dir.path().join("data").join("addressbook.json")
        );
    }
}
