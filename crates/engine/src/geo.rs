//! IP geolocation lookup.
//!
//! Geo coverage is evaluated for every row independently of its
//! classification, so the lookup must never fail: [`IpLocator::get`]
//! substitutes the fixed unknown sentinel on miss and geo emission never
//! branches on absence.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use actlog_model::GeoRecord;

use crate::error::{EngineError, Result};

/// Source of location attributes for IP addresses.
pub trait IpLocator {
    /// Exact lookup; `None` when the address is not known.
    fn lookup(&self, ip: &str) -> Option<&GeoRecord>;

    /// Lookup with the unknown sentinel substituted on miss.
    fn get(&self, ip: &str) -> GeoRecord {
        self.lookup(ip).cloned().unwrap_or_else(GeoRecord::unknown)
    }
}

/// In-memory table loaded once at startup from an 11-column CSV
/// (`ip` followed by the ten location attributes in fact-column order).
#[derive(Debug, Default)]
pub struct CsvIpTable {
    locations: HashMap<String, GeoRecord>,
}

impl CsvIpTable {
    pub fn load(path: &Path) -> Result<Self> {
        let to_error = |source: csv::Error| EngineError::GeoTable {
            path: path.display().to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(to_error)?;

        let mut locations = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(to_error)?;
            let field = |i: usize| record.get(i).unwrap_or("").to_owned();
            locations.insert(
                field(0),
                GeoRecord {
                    country_code: field(1),
                    country: field(2),
                    region: field(3),
                    city: field(4),
                    lat: field(5),
                    long: field(6),
                    postal_code: field(7),
                    timezone: field(8),
                    country_phone_code: field(9),
                    area_phone_code: field(10),
                },
            );
        }
        info!(path = %path.display(), addresses = locations.len(), "loaded ip-location table");
        Ok(Self { locations })
    }

    #[cfg(test)]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, GeoRecord)>) -> Self {
        Self {
            locations: entries.into_iter().collect(),
        }
    }
}

impl IpLocator for CsvIpTable {
    fn lookup(&self, ip: &str) -> Option<&GeoRecord> {
        self.locations.get(ip)
    }
}

/// Locator used when no ip-location table was configured; every address
/// resolves to the unknown sentinel.
#[derive(Debug, Default)]
pub struct NoLocations;

impl IpLocator for NoLocations {
    fn lookup(&self, _ip: &str) -> Option<&GeoRecord> {
        None
    }
}
