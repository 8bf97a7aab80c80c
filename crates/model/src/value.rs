//! SQL value model
//!
//! The narrow value vocabulary shared between fact records and the
//! relational sink contract. Keeping this crate-local (rather than using
//! a driver's value type) keeps everything above the `Destination` trait
//! driver-agnostic.

/// A single cell value bound for the relational sink
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Decimal integer
    Int(i64),
    /// Free text
    Text(String),
    /// SQL NULL
    Null,
}

impl SqlValue {
    /// Whether this value is NULL
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Null => write!(f, "NULL"),
        }
    }
}
