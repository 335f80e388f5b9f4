use std::path::PathBuf;

use crate::error::{DbError, DbResult};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// In-memory database, no persisted state.
    Memory,
    /// Named file resolved against the per-user data directory, under the
    /// engine's namespace. Callers supply only a file name, not a path.
    File(String),
    /// Explicit filesystem path, bypassing directory resolution. Intended
    /// for tests and tooling.
    Path(PathBuf),
}

impl Location {
    pub(crate) fn resolve(&self, namespace: &str) -> DbResult<PathBuf> {
        match self {
            Location::Memory => Ok(PathBuf::from(":memory:")),
            Location::File(file_name) => {
                let base = dirs::data_dir().ok_or_else(|| {
                    DbError::Unknown("no data directory available on this platform".to_string())
                })?;
                let dir = base.join(namespace);
                std::fs::create_dir_all(&dir).map_err(|e| {
                    DbError::Unknown(format!("can't create data directory {}: {e}", dir.display()))
                })?;
                Ok(dir.join(file_name))
            }
            Location::Path(path) => Ok(path.clone()),
        }
    }
}
