//! Safe parameterized query layer over SQLCipher-encrypted `SQLite`.
//!
//! Callers compose queries through [`QueryBuilder`], which keeps literal SQL
//! text and typed parameter values structurally separated: every bound value
//! appends a `?` placeholder and travels through the native typed binding
//! API, never through string concatenation. The [`Engine`] owns the single
//! long-lived connection handle and drives the full statement lifecycle
//! (prepare, bind, step, finalize) inside each call, so no statement handle
//! ever leaks past a call and callers never touch raw handles.
//!
//! ```rust,no_run
//! use cipherlite::{Engine, EngineOptions, Location, Query};
//!
//! # fn demo() -> cipherlite::DbResult<()> {
//! let engine = Engine::open(EngineOptions::new(Location::Memory, "secret"))?;
//! engine.execute_raw("CREATE TABLE player (id INTEGER, name TEXT)")?;
//!
//! let insert = Query::builder()
//!     .push("INSERT INTO player (id, name) VALUES (")
//!     .bind(1_i64)
//!     .push(", ")
//!     .bind("alice")
//!     .push(")")
//!     .build();
//! engine.execute(&insert)?;
//!
//! let select = Query::builder()
//!     .push("SELECT name FROM player WHERE id = ")
//!     .bind(1_i64)
//!     .build();
//! let name = engine.fetch_one(&select, |row| row.text(0))?;
//! assert_eq!(name.as_deref(), Some("alice"));
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod prelude;
pub mod query;
pub mod value;

pub use engine::{Engine, EngineOptions, Location, Row};
pub use error::{DbError, DbResult};
pub use query::{JoinValue, Query, QueryBuilder};
pub use value::{DayCount, Value};
