use rusqlite::Statement;
use tracing::debug_span;

use super::bind::bind_parameter;
use super::connection::Engine;
use super::row::Row;
use crate::error::{DbError, DbResult};
use crate::query::Query;

/// The four call shapes of the execution machine.
///
/// Each call drives prepare, bind-in-order, step, finalize against a private
/// statement handle. The handle is scoped to the call body, so finalization
/// is drop-based and runs on every exit path, including bind and step
/// failures.
impl Engine {
    /// Execute a statement for its side effects.
    ///
    /// Queries with parameters take the full prepare/bind/step-once path;
    /// parameterless queries use the direct-execute primitive, which accepts
    /// multi-statement text.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidQuery`] if the text fails to prepare, or
    /// [`DbError::Unknown`] on a bind or step failure.
    pub fn execute(&self, query: &Query) -> DbResult<()> {
        self.pause_if_configured();
        let _span = debug_span!("execute", query = query.text()).entered();

        if query.has_params() {
            let mut stmt = self.prepare(query)?;
            bind_all(&mut stmt, query)?;
            // One step suffices: statements without result rows complete on
            // the first step, and execute ignores any row a SELECT yields.
            let mut rows = stmt.raw_query();
            rows.next().map_err(step_error)?;
            Ok(())
        } else {
            self.exec_direct(query.text())
        }
    }

    /// Execute raw SQL that can never carry bound parameters, such as schema
    /// and pragma statements.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidQuery`] carrying `sql` if execution fails.
    pub fn execute_raw(&self, sql: &str) -> DbResult<()> {
        self.pause_if_configured();
        let _span = debug_span!("execute_raw", query = sql).entered();

        self.exec_direct(sql)
    }

    /// Stream every result row through `adapter` and hand each materialized
    /// value to `consumer`.
    ///
    /// The adapter runs while the step cursor is positioned on the row; zero
    /// rows means zero invocations and `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidQuery`] if the text fails to prepare,
    /// [`DbError::Unknown`] on a bind or step failure, or the adapter's own
    /// error.
    pub fn fetch<T, A, C>(&self, query: &Query, mut adapter: A, mut consumer: C) -> DbResult<()>
    where
        A: FnMut(&Row<'_, '_>) -> DbResult<T>,
        C: FnMut(T),
    {
        self.pause_if_configured();
        let _span = debug_span!("fetch", query = query.text()).entered();

        let mut stmt = self.prepare(query)?;
        bind_all(&mut stmt, query)?;
        let mut rows = stmt.raw_query();
        while let Some(row) = rows.next().map_err(step_error)? {
            consumer(adapter(&Row::new(row))?);
        }
        Ok(())
    }

    /// Like [`Engine::fetch`] but stops after at most one row.
    ///
    /// Returns `None` if the query produced no rows.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::fetch`].
    pub fn fetch_one<T, A>(&self, query: &Query, adapter: A) -> DbResult<Option<T>>
    where
        A: FnOnce(&Row<'_, '_>) -> DbResult<T>,
    {
        self.pause_if_configured();
        let _span = debug_span!("fetch_one", query = query.text()).entered();

        let mut stmt = self.prepare(query)?;
        bind_all(&mut stmt, query)?;
        let mut rows = stmt.raw_query();
        match rows.next().map_err(step_error)? {
            Some(row) => Ok(Some(adapter(&Row::new(row))?)),
            None => Ok(None),
        }
    }

    fn prepare(&self, query: &Query) -> DbResult<Statement<'_>> {
        self.conn().prepare(query.text()).map_err(|e| DbError::InvalidQuery {
            query: query.text().to_string(),
            message: e.to_string(),
        })
    }

    fn exec_direct(&self, sql: &str) -> DbResult<()> {
        // sqlite3_exec prepares internally, so failures here classify as
        // invalid-query and keep the offending text.
        self.conn()
            .execute_batch(sql)
            .map_err(|e| DbError::InvalidQuery {
                query: sql.to_string(),
                message: e.to_string(),
            })
    }
}

/// Bind parameters 1..N in insertion order. The first failure aborts the
/// remaining binds; the statement still finalizes in the caller's scope.
fn bind_all(stmt: &mut Statement<'_>, query: &Query) -> DbResult<()> {
    for (i, param) in query.params().iter().enumerate() {
        bind_parameter(stmt, i + 1, param)?;
    }
    Ok(())
}

fn step_error(e: rusqlite::Error) -> DbError {
    DbError::Unknown(e.to_string())
}
