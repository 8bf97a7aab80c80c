//! Destination table specs and bootstrap
//!
//! Static DDL for the nine fact tables, plus the bootstrap passes the
//! binary runs around an import: create-if-missing, wipe-for-fresh-run,
//! and the post-run index pass.

use tracing::info;

use crate::destination::Destination;
use crate::error::Result;

/// One column of a destination table
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// Static definition of one destination table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
    pub primary_key: Option<&'static str>,
}

const fn col(name: &'static str, sql_type: &'static str) -> ColumnSpec {
    ColumnSpec { name, sql_type }
}

/// All destination tables, in bootstrap order
///
/// `search_term` is VARCHAR(2000); longer typed terms get truncated by
/// the destination, which is where the counted truncation warnings
/// come from.
pub const ALL_TABLES: &[TableSpec] = &[
    TableSpec {
        name: "Activities",
        columns: &[
            col("row_id", "INT NOT NULL"),
            col("student", "VARCHAR(100)"),
            col("ip_addr", "VARCHAR(16)"),
            col("category", "VARCHAR(30)"),
            col("action_nm", "VARCHAR(30)"),
            col("created_at", "DATETIME"),
            col("updated_at", "DATETIME"),
        ],
        primary_key: Some("row_id"),
    },
    TableSpec {
        name: "ContextPins",
        columns: &[
            col("row_id", "INT"),
            col("quarter_id", "INT"),
            col("crs_id", "INT"),
        ],
        primary_key: None,
    },
    TableSpec {
        name: "Pins",
        columns: &[col("row_id", "INT"), col("crs_id", "INT")],
        primary_key: None,
    },
    TableSpec {
        name: "UnPins",
        columns: &[col("row_id", "INT"), col("crs_id", "INT")],
        primary_key: None,
    },
    TableSpec {
        name: "CrseSelects",
        columns: &[col("row_id", "INT"), col("crs_id", "INT")],
        primary_key: None,
    },
    TableSpec {
        name: "CrseSearches",
        columns: &[
            col("row_id", "INT"),
            col("search_term", "VARCHAR(2000)"),
            col("crs_res", "TEXT"),
            col("instructor_res", "TEXT"),
        ],
        primary_key: None,
    },
    TableSpec {
        name: "EnrollmentHist",
        columns: &[col("row_id", "INT"), col("crs_id", "INT")],
        primary_key: None,
    },
    TableSpec {
        name: "InstructorLookups",
        columns: &[col("row_id", "INT"), col("instructor", "VARCHAR(40)")],
        primary_key: None,
    },
    TableSpec {
        name: "IpLocation",
        columns: &[
            col("row_id", "INT"),
            col("country_code", "VARCHAR(2)"),
            col("country", "VARCHAR(60)"),
            col("state", "VARCHAR(100)"),
            col("city", "VARCHAR(100)"),
            col("lat", "VARCHAR(40)"),
            col("longitude", "VARCHAR(40)"),
            col("zip", "VARCHAR(20)"),
            col("time_zone", "VARCHAR(10)"),
            col("country_phone", "VARCHAR(5)"),
            col("area_code", "VARCHAR(40)"),
        ],
        primary_key: None,
    },
];

/// Indexes created after a completed import: (index name, table, column)
const INDEXES: &[(&str, &str, &str)] = &[
    ("row_id_idx", "ContextPins", "row_id"),
    ("row_id_idx", "CrseSearches", "row_id"),
    ("row_id_idx", "CrseSelects", "row_id"),
    ("row_id_idx", "EnrollmentHist", "row_id"),
    ("row_id_idx", "InstructorLookups", "row_id"),
    ("row_id_idx", "Pins", "row_id"),
    ("row_id_idx", "UnPins", "row_id"),
    ("row_id_idx", "IpLocation", "row_id"),
    ("crs_id_idx", "ContextPins", "crs_id"),
    ("crs_id_idx", "CrseSelects", "crs_id"),
    ("crs_id_idx", "EnrollmentHist", "crs_id"),
    ("crs_id_idx", "Pins", "crs_id"),
    ("crs_id_idx", "UnPins", "crs_id"),
    ("created_at_idx", "Activities", "created_at"),
    ("action_nm_idx", "Activities", "action_nm"),
];

/// Create every destination table that does not exist yet
pub fn ensure_tables<D: Destination>(dest: &mut D) -> Result<()> {
    for spec in ALL_TABLES {
        if !dest.table_exists(spec.name)? {
            info!(table = spec.name, "creating missing table");
            dest.create_table(spec)?;
        }
    }
    Ok(())
}

/// Wipe all destination tables for a fresh run
pub fn truncate_all<D: Destination>(dest: &mut D) -> Result<()> {
    for spec in ALL_TABLES {
        dest.truncate_table(spec.name)?;
    }
    Ok(())
}

/// Post-run index pass over row ids, course ids and activity columns
pub fn create_indexes<D: Destination>(dest: &mut D) -> Result<()> {
    for &(index, table, column) in INDEXES {
        info!(table, column, "indexing");
        dest.create_index_if_absent(index, table, column)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
