//! Batch capacity settings

use serde::Deserialize;

/// Flush thresholds for the fact writer
///
/// High-volume tables (activities, course selects, enrollment history,
/// ip locations) use `big`; the rest use `small`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BatchingConfig {
    /// Capacity for high-volume tables
    /// Default: 20000
    pub big: usize,

    /// Capacity for everything else
    /// Default: 1000
    pub small: usize,
}

impl Default for BatchingConfig {
    fn default() -> Self {
        Self {
            big: 20_000,
            small: 1_000,
        }
    }
}
