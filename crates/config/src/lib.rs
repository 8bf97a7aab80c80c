//! actlog Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use actlog_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[database]\nuser = \"loader\"").unwrap();
//! ```
//!
//! # Example Minimal Config
//!
//! ```toml
//! [database]
//! host = "db.example.edu"
//! user = "loader"
//!
//! [references]
//! course_names = "reference/course_names.csv"
//! ```

mod batching;
mod database;
mod error;
mod logging;
mod references;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use batching::BatchingConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogLevel};
pub use references::ReferencesConfig;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination database connection settings
    pub database: DatabaseConfig,

    /// Batch capacities for the fact writer
    pub batching: BatchingConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Reference table locations (course names, ip locations)
    pub references: ReferencesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.batching.big == 0 {
            return Err(ConfigError::invalid_value(
                "batching",
                "big",
                "must be greater than zero",
            ));
        }
        if self.batching.small == 0 {
            return Err(ConfigError::invalid_value(
                "batching",
                "small",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.database, "activity_log");
        assert_eq!(config.batching.big, 20_000);
        assert_eq!(config.batching.small, 1_000);
        assert!(config.references.ip_locations.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[database]
host = "db.example.edu"
port = 3307
user = "loader"
database = "carta_activity"
password_file = "/run/secrets/mysql"

[batching]
big = 5000
small = 250

[log]
level = "debug"

[references]
course_names = "reference/course_names.csv"
ip_locations = "reference/ip_locations.csv"
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.database.host, "db.example.edu");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.user.as_deref(), Some("loader"));
        assert_eq!(config.database.database, "carta_activity");
        assert_eq!(config.batching.big, 5000);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(
            config.references.ip_locations.as_deref(),
            Some(Path::new("reference/ip_locations.csv"))
        );
    }

    #[test]
    fn test_zero_batch_capacity_is_rejected() {
        let result = Config::from_str("[batching]\nbig = 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(result.is_err());
    }
}
