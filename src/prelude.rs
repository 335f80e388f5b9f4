//! Convenient imports for common functionality.

pub use crate::engine::{Engine, EngineOptions, Location, Row};
pub use crate::error::{DbError, DbResult};
pub use crate::query::{JoinValue, Query, QueryBuilder};
pub use crate::value::{DayCount, Value};
