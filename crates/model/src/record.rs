//! Log row decoding
//!
//! One `LogRow` per physical line of the activity log. Columns sit at
//! fixed positions, with one wrinkle: visitors sometimes type a literal
//! tab into the search box, which splits the key-parameter field and
//! shifts everything after it one column to the right. The two
//! timestamps are therefore read from the LAST two fields of the
//! physical record, not their nominal positions, whenever the record is
//! at least nominal width; truncated records fall back to the nominal
//! positions rather than promote an arbitrary field to a timestamp.

use crate::error::{ModelError, Result};

/// Output payload value meaning "no output was recorded"
pub const NULL_SENTINEL: &str = "NULL";

/// Actor value meaning "no actor"; rows carrying it produce no facts
pub const NO_ACTOR_SENTINEL: &str = "0";

// Fixed column positions in the source TSV.
const ID_POS: usize = 0;
const ACTOR_POS: usize = 1;
const IP_ADDRESS_POS: usize = 2;
const CALLER_POS: usize = 3;
const ACTION_POS: usize = 4;
const KEY_PARAMETER_POS: usize = 5;
const ENVIRONMENT_POS: usize = 6;
const OUTPUT_POS: usize = 7;
const BROWSER_POS: usize = 8;
const CREATED_AT_POS: usize = 9;
const UPDATED_AT_POS: usize = 10;

/// Field count of an unshifted record
const NOMINAL_FIELD_COUNT: usize = 11;

/// One decoded activity log row
///
/// The environment payload is kept as raw bytes: it is an opaque,
/// format-shifting blob and must survive non-UTF-8 content. The other
/// free-text fields only ever get matched against ASCII anchors, so a
/// lossy conversion is safe for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// Monotonic source-order identifier
    pub row_id: u64,

    /// Opaque actor identifier ("0" means no actor)
    pub actor: String,

    /// Source IP address as logged
    pub ip: String,

    /// Originating screen/controller token
    pub caller: String,

    /// Verb token
    pub action: String,

    /// Key-parameter payload (free text)
    pub key_parameter: String,

    /// Environment payload (opaque bytes, session-scoped context)
    pub environment: Vec<u8>,

    /// Output payload ("NULL" or a format-specific result blob)
    pub output: String,

    /// Browser string
    pub browser: String,

    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,

    /// Update timestamp, `YYYY-MM-DD HH:MM:SS`
    pub updated_at: String,
}

impl LogRow {
    /// Decode a row from raw TSV fields
    ///
    /// Only the row id is load-bearing: a missing or non-numeric id is an
    /// error, everything else degrades to an empty field. Timestamps come
    /// from the last two physical fields (see module docs).
    pub fn from_fields(fields: &[&[u8]]) -> Result<Self> {
        let id_field = fields.get(ID_POS).copied().ok_or(ModelError::MissingRowId)?;
        let id_text = String::from_utf8_lossy(id_field);
        let row_id: u64 = id_text.trim().parse().map_err(|_| ModelError::BadRowId {
            value: id_text.into_owned(),
        })?;

        let text = |pos: usize| -> String {
            fields
                .get(pos)
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .unwrap_or_default()
        };
        let from_end = |back: usize| -> String {
            fields
                .len()
                .checked_sub(back)
                .and_then(|pos| fields.get(pos))
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .unwrap_or_default()
        };

        // The last-two-fields rule only holds for records at nominal
        // width or wider; on a truncated record it would hand back an
        // arbitrary earlier field as a timestamp.
        let (created_at, updated_at) = if fields.len() >= NOMINAL_FIELD_COUNT {
            (from_end(2), from_end(1))
        } else {
            (text(CREATED_AT_POS), text(UPDATED_AT_POS))
        };

        Ok(Self {
            row_id,
            actor: text(ACTOR_POS),
            ip: text(IP_ADDRESS_POS),
            caller: text(CALLER_POS),
            action: text(ACTION_POS),
            key_parameter: text(KEY_PARAMETER_POS),
            environment: fields.get(ENVIRONMENT_POS).map(|f| f.to_vec()).unwrap_or_default(),
            output: text(OUTPUT_POS),
            browser: text(BROWSER_POS),
            created_at,
            updated_at,
        })
    }

    /// Whether the row carries the "no actor" sentinel
    #[inline]
    pub fn has_no_actor(&self) -> bool {
        self.actor == NO_ACTOR_SENTINEL
    }

    /// Whether the output payload is the null sentinel
    #[inline]
    pub fn has_output(&self) -> bool {
        self.output != NULL_SENTINEL
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;
