//! The closed set of bindable value kinds.

use chrono::{DateTime, NaiveDateTime};

use crate::error::{DbError, DbResult};

mod day_count;

pub use day_count::DayCount;

/// A value that can be bound to a statement parameter or read back from a
/// result column.
///
/// Exactly one kind is active per instance; [`Value::Null`] binds to native
/// NULL. Values are immutable, created at the call site, and consumed during
/// a single bind:
/// ```rust
/// use cipherlite::Value;
///
/// let params = vec![
///     Value::Int(1),
///     Value::Text("alice".into()),
///     Value::Bool(true),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value, persisted as integer 0 or 1
    Bool(bool),
    /// Timestamp value, persisted as float seconds since the Unix epoch
    Timestamp(NaiveDateTime),
    /// Date-only value, persisted as a float day count
    Day(DayCount),
    /// Binary data
    Blob(Vec<u8>),
    /// NULL value
    Null,
}

impl Value {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            // Stored form of a boolean is an integer 0 or 1.
            Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let Value::Timestamp(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_day(&self) -> Option<DayCount> {
        if let Value::Day(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let Value::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

impl From<DayCount> for Value {
    fn from(v: DayCount) -> Self {
        Self::Day(v)
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Self::Day(DayCount::from_date(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Blob(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

/// Stored form of a timestamp: float seconds since the Unix epoch, with
/// microsecond resolution in the fraction. Numeric, never a formatted string.
pub(crate) fn timestamp_to_seconds(dt: &NaiveDateTime) -> f64 {
    let utc = dt.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_micros()) / 1_000_000.0
}

pub(crate) fn timestamp_from_seconds(seconds: f64) -> DbResult<NaiveDateTime> {
    let mut whole = seconds.trunc() as i64;
    let mut micros = (seconds.fract() * 1_000_000.0).round() as i64;
    if micros >= 1_000_000 {
        whole += 1;
        micros = 0;
    }
    if micros < 0 {
        whole -= 1;
        micros += 1_000_000;
    }
    let nanos = (micros as u32) * 1_000;
    DateTime::from_timestamp(whole, nanos)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| DbError::Unknown(format!("timestamp out of range: {seconds}")))
}
