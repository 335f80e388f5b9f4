use std::time::Duration;

use rusqlite::{Connection, ErrorCode};

use super::options::EngineOptions;
use crate::error::{DbError, DbResult};

// Encrypted-and-unkeyed files open successfully and only fail on first page
// access, so a harmless create/drop probes whether the key is right.
const KEY_CHECK_SQL: &str = "CREATE TABLE __cipherlite__(t);DROP TABLE __cipherlite__";

/// Owns exactly one native connection for its lifetime.
///
/// The handle is opened and keyed once at construction and closed exactly
/// once at teardown (on [`Engine::close`] or drop). `Engine` is not `Clone`;
/// each instance is a distinct handle. Statement handles never outlive a
/// single execute/fetch call.
pub struct Engine {
    conn: Connection,
    delay: Option<Duration>,
}

impl Engine {
    /// Open the configured target, apply the encryption key, and verify it.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unknown`] if the target can't be resolved or
    /// opened, or if the key fails verification against an existing store.
    pub fn open(options: EngineOptions) -> DbResult<Self> {
        let conn = open_target(&options)?;
        Ok(Self {
            conn,
            delay: options.delay,
        })
    }

    /// Point this engine at a different target.
    ///
    /// The previous handle is closed before the new one is adopted.
    /// Retargeting is only reachable through this explicit call, never from
    /// the constructor.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unknown`] if the new target can't be opened or
    /// keyed. The engine keeps its current handle in that case.
    pub fn retarget(&mut self, options: EngineOptions) -> DbResult<()> {
        let conn = open_target(&options)?;
        self.conn = conn;
        self.delay = options.delay;
        Ok(())
    }

    /// Close the connection handle.
    ///
    /// Consumes the engine, so a second close cannot be expressed. Dropping
    /// the engine closes the handle as well; this form surfaces any close
    /// error instead of discarding it.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unknown`] if the native close fails, e.g. due to
    /// unfinished native work.
    pub fn close(self) -> DbResult<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| DbError::Unknown(e.to_string()))
    }

    pub(super) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Artificial-delay test seam, configured via [`EngineOptions::delay`].
    pub(super) fn pause_if_configured(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

fn open_target(options: &EngineOptions) -> DbResult<Connection> {
    let path = options.location.resolve(&options.namespace)?;
    tracing::debug!(path = %path.display(), "opening database");

    let conn = Connection::open(&path)
        .map_err(|e| DbError::Unknown(format!("can't open database {}: {e}", path.display())))?;

    conn.execute_batch("PRAGMA cipher_memory_security = OFF")
        .map_err(|e| DbError::Unknown(e.to_string()))?;
    apply_key(&conn, &options.key)?;

    Ok(conn)
}

/// Key the connection, then probe it. A wrong key on a previously keyed
/// store surfaces as the native "not a database" code on first access.
fn apply_key(conn: &Connection, key: &str) -> DbResult<()> {
    // pragma_update quotes the key as a SQL literal; the key text never gets
    // spliced into SQL by this crate.
    conn.pragma_update(None, "key", key)
        .map_err(|e| DbError::Unknown(e.to_string()))?;

    match conn.execute_batch(KEY_CHECK_SQL) {
        Ok(()) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::NotADatabase => {
            Err(DbError::Unknown("invalid encryption key".to_string()))
        }
        Err(e) => Err(DbError::Unknown(e.to_string())),
    }
}
