//! Reference table locations

use std::path::PathBuf;

use serde::Deserialize;

/// Paths to the static lookup tables loaded once at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    /// Course-name-to-id CSV (`course_name, course_id`); required to run
    /// Default: reference/course_names.csv
    pub course_names: PathBuf,

    /// IP-to-location CSV; geolocation resolves to the unknown sentinel
    /// when unset
    pub ip_locations: Option<PathBuf>,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            course_names: PathBuf::from("reference/course_names.csv"),
            ip_locations: None,
        }
    }
}
