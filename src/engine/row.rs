use crate::error::{DbError, DbResult};
use crate::value::{self, DayCount, Value};

/// The current result row, positioned by the step cursor.
///
/// Handed to row adapters during `fetch`/`fetch_one`; valid only while the
/// cursor sits on that row. Columns are addressed by 0-based index.
pub struct Row<'stmt, 'row> {
    inner: &'row rusqlite::Row<'stmt>,
}

impl<'stmt, 'row> Row<'stmt, 'row> {
    pub(super) fn new(inner: &'row rusqlite::Row<'stmt>) -> Self {
        Self { inner }
    }

    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not an integer.
    pub fn int(&self, idx: usize) -> DbResult<i64> {
        self.get(idx)
    }

    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not text.
    pub fn text(&self, idx: usize) -> DbResult<String> {
        self.get(idx)
    }

    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not a float.
    pub fn real(&self, idx: usize) -> DbResult<f64> {
        self.get(idx)
    }

    /// Read a stored 0/1 integer back as a boolean.
    ///
    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not an integer.
    pub fn boolean(&self, idx: usize) -> DbResult<bool> {
        let stored: i64 = self.get(idx)?;
        Ok(stored != 0)
    }

    /// Decode a float epoch-seconds column into a timestamp.
    ///
    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent, not numeric, or
    /// out of the representable timestamp range.
    pub fn timestamp(&self, idx: usize) -> DbResult<chrono::NaiveDateTime> {
        let seconds: f64 = self.get(idx)?;
        value::timestamp_from_seconds(seconds)
    }

    /// Decode a float day-count column.
    ///
    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not numeric.
    pub fn day(&self, idx: usize) -> DbResult<DayCount> {
        let days: f64 = self.get(idx)?;
        Ok(DayCount::new(days))
    }

    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent or not a blob.
    pub fn blob(&self, idx: usize) -> DbResult<Vec<u8>> {
        self.get(idx)
    }

    /// Read a column dynamically, NULL-aware.
    ///
    /// Timestamps, booleans, and day counts come back in their stored form
    /// (`Float` and `Int`), since the storage classes don't distinguish them.
    ///
    /// # Errors
    /// Returns [`DbError::Unknown`] if the column is absent.
    pub fn value(&self, idx: usize) -> DbResult<Value> {
        let dynamic: rusqlite::types::Value = self.get(idx)?;
        Ok(match dynamic {
            rusqlite::types::Value::Null => Value::Null,
            rusqlite::types::Value::Integer(i) => Value::Int(i),
            rusqlite::types::Value::Real(f) => Value::Float(f),
            rusqlite::types::Value::Text(s) => Value::Text(s),
            rusqlite::types::Value::Blob(b) => Value::Blob(b),
        })
    }

    fn get<T: rusqlite::types::FromSql>(&self, idx: usize) -> DbResult<T> {
        self.inner
            .get(idx)
            .map_err(|e| DbError::Unknown(e.to_string()))
    }
}
