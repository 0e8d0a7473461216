//! CLI configuration - database location and share-link base URL.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent CLI configuration, stored as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file
    pub db_path: PathBuf,

    /// Base URL that share links and QR payloads point at
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = dirs::data_dir()
            .map(|d| d.join("placard").join("placard.db"))
            .unwrap_or_else(|| PathBuf::from("placard.db"));
        Self {
            db_path,
            share_base_url: "https://placard.example/ver".to_string(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("no config directory available".to_string()))?;
        Ok(dir.join("placard").join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}
