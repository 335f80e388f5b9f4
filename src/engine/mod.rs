//! Connection ownership and the statement execution machine.
//!
//! The module is split for organization:
//! - `location`: connection target resolution (memory or named file)
//! - `options`: construction-time configuration
//! - `connection`: open/key/verify, retargeting, teardown
//! - `bind`: the single typed bind site
//! - `executor`: the four call shapes (execute, `execute_raw`, fetch, `fetch_one`)
//! - `row`: the current-row cursor handed to row adapters

mod bind;
mod connection;
mod executor;
mod location;
mod options;
mod row;

pub use connection::Engine;
pub use location::Location;
pub use options::EngineOptions;
pub use row::Row;
