//! Configuration for the Paddock services.

use std::path::{Path, PathBuf};

use paddock_core::logging_facility::Profile;
use paddock_store::seed::{DEFAULT_MATCH_COUNT, DEFAULT_RACE_COUNT};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up without extension in the working dir
pub const DEFAULT_CONFIG_NAME: &str = "paddock";

/// Environment variable prefix, e.g. `PADDOCK__SERVER__PORT=9100`
pub const ENV_PREFIX: &str = "PADDOCK";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./db/racing.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// How many synthetic records to write on first initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_race_count")]
    pub race_count: u32,
    #[serde(default = "default_match_count")]
    pub match_count: u32,
}

fn default_race_count() -> u32 {
    DEFAULT_RACE_COUNT
}

fn default_match_count() -> u32 {
    DEFAULT_MATCH_COUNT
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            race_count: default_race_count(),
            match_count: default_match_count(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub profile: Profile,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `paddock.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` instead of the default config file
    ///
    /// Precedence, lowest first: built-in defaults, the config file,
    /// `PADDOCK__*` environment variables.
    pub fn load_from(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.path, PathBuf::from("./db/racing.db"));
        assert_eq!(config.seed.race_count, 100);
        assert_eq!(config.seed.match_count, 30);
        assert_eq!(config.logging.profile, Profile::Development);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paddock.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[seed]\nrace_count = 12\n\n[logging]\nprofile = \"production\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.seed.race_count, 12);
        assert_eq!(config.seed.match_count, 30);
        assert_eq!(config.logging.profile, Profile::Production);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load_from(Some(&missing)).is_err());
    }
}
