use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Every native failure is converted at the call site where it occurs.
/// A failed prepare becomes [`DbError::InvalidQuery`] and keeps the offending
/// SQL for diagnostics; anything else (bind, step, open, close, key
/// verification) becomes [`DbError::Unknown`] carrying the native message.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid query `{query}`: {message}")]
    InvalidQuery { query: String, message: String },

    #[error("database error: {0}")]
    Unknown(String),
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
