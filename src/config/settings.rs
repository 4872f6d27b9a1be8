//! User settings for rolodex-cli
//!
//! Manages user preferences, currently the default birthday lookahead window.

use serde::{Deserialize, Serialize};

use super::paths::RolodexPaths;
use crate::error::RolodexError;

/// User settings for rolodex-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default inclusive lookahead window for the `birthdays` command, in days
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_lookahead_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            lookahead_days: default_lookahead_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating and persisting the default file on
    /// first run so the knobs are discoverable in config.json
    pub fn load_or_create(paths: &RolodexPaths) -> Result<Self, RolodexError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RolodexError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| RolodexError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RolodexPaths) -> Result<(), RolodexError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RolodexError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RolodexError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
