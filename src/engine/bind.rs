use rusqlite::Statement;
use rusqlite::types::Null;

use crate::error::{DbError, DbResult};
use crate::value::{self, Value};

/// Bind exactly one parameter at the 1-based `index`.
///
/// This is the single bind site for the whole crate; the match is exhaustive
/// over the closed [`Value`] set. Text and blob buffers are copied by the
/// driver (transient binding), so the caller may free them immediately after
/// this returns. Any native bind failure surfaces as [`DbError::Unknown`].
pub(super) fn bind_parameter(stmt: &mut Statement<'_>, index: usize, param: &Value) -> DbResult<()> {
    let bound = match param {
        Value::Int(v) => stmt.raw_bind_parameter(index, v),
        Value::Float(v) => stmt.raw_bind_parameter(index, v),
        Value::Text(v) => stmt.raw_bind_parameter(index, v.as_str()),
        Value::Bool(v) => stmt.raw_bind_parameter(index, i64::from(*v)),
        Value::Timestamp(v) => stmt.raw_bind_parameter(index, value::timestamp_to_seconds(v)),
        Value::Day(v) => stmt.raw_bind_parameter(index, v.days()),
        Value::Blob(v) => stmt.raw_bind_parameter(index, v.as_slice()),
        Value::Null => stmt.raw_bind_parameter(index, Null),
    };
    bound.map_err(|e| DbError::Unknown(e.to_string()))
}
