//! Destination database settings

use serde::Deserialize;

/// MySQL connection settings
///
/// The password is never stored in the config file: it either comes from
/// the interactive prompt (`--password`) or from `password_file`, a file
/// holding nothing but the password.
///
/// # Example
///
/// ```toml
/// [database]
/// host = "db.example.edu"
/// user = "loader"
/// database = "activity_log"
/// password_file = "/run/secrets/mysql"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Server hostname
    /// Default: localhost
    pub host: String,

    /// Server port
    /// Default: 3306
    pub port: u16,

    /// Account name; the CLI `--user` flag overrides this
    pub user: Option<String>,

    /// Schema holding the destination tables
    /// Default: activity_log
    pub database: String,

    /// File containing only the password, as an alternative to the prompt
    pub password_file: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: None,
            database: "activity_log".into(),
            password_file: None,
        }
    }
}
