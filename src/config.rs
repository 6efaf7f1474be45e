// src/config.rs

use crate::error::{GolingError, Result};
use crate::models::Coordinates;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Position reported to new logs. Without both coordinates, or with
/// `enabled = false`, location is treated as denied.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LocationConfig {
    pub enabled: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: "~/.config/goling/goling.db".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            latitude: None,
            longitude: None,
        }
    }
}

impl LocationConfig {
    pub fn position(&self) -> Option<Coordinates> {
        if !self.enabled {
            return None;
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// 获取配置文件的标准路径 (~/.config/goling/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(GolingError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/goling/config.toml"))
}

impl Config {
    /// Reads the TOML file if present, then applies env overrides
    /// (`GOLING_DB`, `GOLING_LOG`).
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GOLING_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("GOLING_LOG") {
            self.logging.level = val;
        }
    }

    pub fn resolved_db_path(&self) -> Result<PathBuf> {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home_dir = dirs::home_dir().ok_or(GolingError::HomeDirNotFound)?;
            Ok(home_dir.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
