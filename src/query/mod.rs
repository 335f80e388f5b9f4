//! Query representation and safe template composition.
//!
//! A [`Query`] pairs SQL text with an ordered parameter list. The
//! [`QueryBuilder`] is the only composition surface: literals append to the
//! text verbatim, bound values append a `?` token and the typed value, so
//! caller data never reaches the SQL text itself.

mod builder;
mod join;

pub use builder::QueryBuilder;
pub use join::JoinValue;

use crate::value::Value;

/// A SQL string and its bound parameters, immutable once built.
///
/// Parameter order is left-to-right bind order (1-indexed in the native
/// protocol). A query built from a plain literal has an empty parameter list
/// and is never bound:
/// ```rust
/// use cipherlite::Query;
///
/// let q = Query::builder()
///     .push("SELECT name FROM player WHERE id = ")
///     .bind(7_i64)
///     .build();
/// assert_eq!(q.text(), "SELECT name FROM player WHERE id = ?");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    params: Vec<Value>,
}

impl Query {
    /// Create a query from raw text and an already-ordered parameter list.
    ///
    /// Placeholder/parameter count mismatches are not validated here; they
    /// surface as native bind errors at execution time. Prefer
    /// [`Query::builder`], which keeps the counts equal by construction.
    pub fn new(text: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text, Vec::new())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::new(text, Vec::new())
    }
}
