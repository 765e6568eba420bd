//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::{FilterPipeline, DEFAULT_MATCH_LIMIT};
use crate::models::Roster;
use crate::storage::StorageConfig;

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

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the results CSV
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    /// Skip unparseable rows instead of refusing to start
    #[serde(default)]
    pub skip_malformed_rows: bool,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/results.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            skip_malformed_rows: false,
        }
    }
}

/// Eligible team roster configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Teams in scope; defaults to the 2022 World Cup field
    #[serde(default)]
    pub teams: Roster,
}

/// Dashboard defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Matches shown when no count is selected
    #[serde(default = "default_matches")]
    pub default_matches: usize,
}

fn default_matches() -> usize {
    DEFAULT_MATCH_LIMIT
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_matches: default_matches(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dataset: DatasetConfig::default(),
            roster: RosterConfig::default(),
            dashboard: DashboardConfig::default(),
            server: ServerConfig::default(),
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

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.teams.is_empty() {
            return Err(ConfigError::ValidationError(
                "Roster must list at least one team".to_string(),
            ));
        }

        if self.dashboard.default_matches == 0 {
            return Err(ConfigError::ValidationError(
                "Default match count must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(self.dataset.path.clone())
            .with_skip_malformed_rows(self.dataset.skip_malformed_rows)
    }

    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::new(self.roster.teams.clone())
            .with_default_limit(self.dashboard.default_matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.dataset.path, PathBuf::from("./data/results.csv"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.roster.teams.len(), 32);
        assert_eq!(config.dashboard.default_matches, 10);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_roster() {
        let mut config = AppConfig::default();
        config.roster.teams = Roster::new(Vec::<String>::new());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_matches() {
        let mut config = AppConfig::default();
        config.dashboard.default_matches = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[dataset]
path = "/srv/results.csv"
skip_malformed_rows = true

[roster]
teams = ["Italy", "Spain"]

[dashboard]
default_matches = 5
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.storage().skip_malformed_rows);
        assert_eq!(config.storage().results_path, PathBuf::from("/srv/results.csv"));
        assert!(config.roster.teams.contains("Italy"));
        assert!(!config.roster.teams.contains("Qatar"));
        assert_eq!(config.pipeline().default_limit(), 5);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/form-guide.toml")).unwrap();
        assert_eq!(config.roster.teams.len(), 32);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.dataset.path, parsed.dataset.path);
        assert_eq!(config.roster.teams, parsed.roster.teams);
    }
}
