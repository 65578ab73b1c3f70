//! Application configuration.
//!
//! Settings come from an optional `exovis.toml` file with environment
//! variable overrides on top:
//!
//! - `EXOVIS_DATA_DIR`: catalog data directory (default `data/`)
//! - `EXOVIS_MODEL_DIR`: model artifact directory (default `models/`)
//!
//! A nonexistent data directory is not a startup failure; catalog absence
//! is a per-endpoint condition.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub model: ModelSettings,
}

/// Catalog data directory and optional per-mission file overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub kepler_file: Option<String>,
    #[serde(default)]
    pub tess_file: Option<String>,
    #[serde(default)]
    pub k2_file: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            kepler_file: None,
            tess_file: None,
            k2_file: None,
        }
    }
}

/// Model artifact directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_dir")]
    pub artifact_dir: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            artifact_dir: default_model_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `exovis.toml` in standard locations, falling
    /// back to defaults when no file exists, then apply environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("exovis.toml"),
            PathBuf::from("config/exovis.toml"),
            PathBuf::from("../exovis.toml"),
        ];

        let mut config = Self::default();
        for path in search_paths {
            if path.exists() {
                config = Self::from_file(&path)?;
                break;
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment variables take precedence over file settings.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("EXOVIS_DATA_DIR") {
            if !dir.is_empty() {
                self.catalog.data_dir = PathBuf::from(dir);
            }
        }
        if let Ok(dir) = std::env::var("EXOVIS_MODEL_DIR") {
            if !dir.is_empty() {
                self.model.artifact_dir = PathBuf::from(dir);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.data_dir, PathBuf::from("data"));
        assert_eq!(config.model.artifact_dir, PathBuf::from("models"));
        assert!(config.catalog.kepler_file.is_none());
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
[catalog]
data_dir = "/srv/exovis/data"
kepler_file = "koi_cumulative.csv"

[model]
artifact_dir = "/srv/exovis/models"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.data_dir, PathBuf::from("/srv/exovis/data"));
        assert_eq!(
            config.catalog.kepler_file.as_deref(),
            Some("koi_cumulative.csv")
        );
        assert_eq!(config.model.artifact_dir, PathBuf::from("/srv/exovis/models"));
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let toml = r#"
[catalog]
data_dir = "elsewhere"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.data_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.model.artifact_dir, PathBuf::from("models"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exovis.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
