//! Settings loading utilities
//!
//! Locates the settings file and layers environment overrides on top of it.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV_VAR: &str = "MESSENGER_CONFIG";

/// Settings loader with multiple source support
#[derive(Debug)]
pub struct SettingsLoader {
    /// Default settings
    defaults: Settings,
}

impl SettingsLoader {
    /// Create new settings loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the settings file path from MESSENGER_CONFIG or the default location
    ///
    /// Priority:
    /// 1. MESSENGER_CONFIG environment variable
    /// 2. ~/.config/messenger-endpoints/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using settings file from {}: {:?}", CONFIG_ENV_VAR, path);
                return Some(path);
            }
            warn!("{} points to non-existent file: {:?}", CONFIG_ENV_VAR, path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("messenger-endpoints").join("config.toml");
            if default_path.exists() {
                debug!("Using default settings file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No settings file found");
        None
    }

    /// Load settings with precedence order:
    /// 1. Environment variables
    /// 2. Settings file
    /// 3. Default values
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let settings = self.load_layers(config_file)?;
        settings.validate()?;

        debug!("Final settings: {:?}", settings);
        Ok(settings)
    }

    /// Layer file and environment over the defaults without validating.
    ///
    /// For callers that apply further overrides (command-line flags) and
    /// validate the result themselves.
    pub fn load_layers(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading settings from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Settings file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings.merge_with_env()
    }

    /// Get default settings
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
