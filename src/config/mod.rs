//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Roster;
use crate::storage::{StorageConfig, DEFAULT_RESULTS_FILE};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File name of the result log inside `data_dir`
    #[serde(default = "default_results_file")]
    pub results_file: String,

    #[serde(default)]
    pub roster: Roster,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_results_file() -> String {
    DEFAULT_RESULTS_FILE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            results_file: default_results_file(),
            roster: Roster::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.results_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "results_file must not be empty".to_string(),
            ));
        }

        if self.roster.is_empty() {
            return Err(ConfigError::ValidationError(
                "roster must list at least one fighter".to_string(),
            ));
        }

        for fighter in &self.roster.fighters {
            if fighter.trim().is_empty()
                || fighter.trim() != fighter.as_str()
                || fighter.contains([',', '\n', '\r'])
            {
                return Err(ConfigError::ValidationError(format!(
                    "invalid fighter name in roster: {:?}",
                    fighter
                )));
            }
        }

        Ok(())
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(self.data_dir.clone()).with_results_file(self.results_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.results_file, "street_fighter_results.csv");
        assert_eq!(config.roster, Roster::default());
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_roster() {
        let mut config = AppConfig::default();
        config.roster.fighters.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_fighter_name() {
        let mut config = AppConfig::default();
        config.roster.fighters.push("Dee,Jay".to_string());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_padded_fighter_name() {
        let mut config = AppConfig::default();
        config.roster.fighters[0] = " Ryu".to_string();
        assert!(config.validate().is_err());

        config.roster.fighters[0] = "Ryu ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_results_file() {
        let mut config = AppConfig::default();
        config.results_file = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/tmp/fights"

            [roster]
            fighters = ["Ryu", "Zangief"]
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/fights"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.roster.fighters, vec!["Ryu", "Zangief"]);
        assert_eq!(
            config.storage().results_path(),
            PathBuf::from("/tmp/fights/street_fighter_results.csv")
        );
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.results_file, DEFAULT_RESULTS_FILE);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[roster]\nfighters = []\n").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.roster, parsed.roster);
    }
}
