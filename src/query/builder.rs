use super::Query;
use super::join::JoinValue;
use crate::value::Value;

/// Fluent builder for [`Query`] composition.
///
/// Every bound value appends exactly one `?` to the text and one [`Value`]
/// to the parameter list, in call order. The resulting text never contains
/// caller-controlled data outside placeholder tokens.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    text: String,
    params: Vec<Value>,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal SQL verbatim.
    #[must_use]
    pub fn push(mut self, literal: &str) -> Self {
        self.text.push_str(literal);
        self
    }

    /// Append one placeholder and bind `value` to it.
    #[must_use]
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.text.push('?');
        self.params.push(value.into());
        self
    }

    /// Bind a raw-integer-backed enum by its underlying integer.
    #[must_use]
    pub fn bind_enum(self, value: impl Into<i64>) -> Self {
        let raw: i64 = value.into();
        self.bind(raw)
    }

    /// Serialize `elements` into a single joined string and bind it as one
    /// `Text` parameter. A sequence becomes exactly one placeholder and one
    /// bound value, not N placeholders.
    ///
    /// `separator` is inserted between consecutive elements; pass `""` for
    /// plain concatenation:
    /// ```rust
    /// use cipherlite::Query;
    ///
    /// let q = Query::builder()
    ///     .push("SELECT ")
    ///     .bind_join(&[1_i64, 2, 3], "")
    ///     .build();
    /// assert_eq!(q.text(), "SELECT ?");
    /// assert_eq!(q.params().len(), 1);
    /// ```
    #[must_use]
    pub fn bind_join<T: JoinValue>(mut self, elements: &[T], separator: &str) -> Self {
        let mut joined = String::with_capacity(elements.len() * (separator.len() + 1));
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                joined.push_str(separator);
            }
            element.push_joined(&mut joined);
        }
        self.text.push('?');
        self.params.push(Value::Text(joined));
        self
    }

    #[must_use]
    pub fn build(self) -> Query {
        Query::new(self.text, self.params)
    }
}
