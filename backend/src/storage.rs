//! The SQLite file behind the service and the per-request sessions opened on it.
//!
//! Nothing here is global: a [`Storage`] is built once from the config and
//! cloned into the router. Every request opens its own [`Session`], and the
//! connection closes when the session is dropped, on success or error alike.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use rusqlite::{Connection, Transaction, TransactionBehavior};
use thiserror::Error;

use crate::{config::Config, schema};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create schema: {0}")]
    Schema(#[source] rusqlite::Error),
}

/// Handle to the database file plus the settings applied to each connection.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    busy_timeout: Duration,
    echo_sql: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_secs(5),
            echo_sql: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.database)
            .with_busy_timeout(config.busy_timeout())
            .with_echo_sql(config.echo_sql)
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn with_echo_sql(mut self, echo_sql: bool) -> Self {
        self.echo_sql = echo_sql;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `task` table if it is missing. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let session = self.acquire_session()?;
        session
            .conn()
            .execute_batch(schema::CREATE_TABLES)
            .map_err(StorageError::Schema)?;

        tracing::info!(path = %self.path.display(), "database schema ready");
        Ok(())
    }

    /// Opens a new connection for the caller. Sessions are never pooled.
    pub fn acquire_session(&self) -> Result<Session, StorageError> {
        let open_err = |source| StorageError::Open {
            path: self.path.clone(),
            source,
        };

        let mut conn = Connection::open(&self.path).map_err(open_err)?;
        conn.busy_timeout(self.busy_timeout).map_err(open_err)?;
        if self.echo_sql {
            conn.trace(Some(echo_statement as fn(&str)));
        }

        tracing::trace!(path = %self.path.display(), "storage session opened");
        Ok(Session { conn })
    }
}

fn echo_statement(sql: &str) {
    tracing::debug!(target: "backend::sql", "{}", sql.trim());
}

/// One connection, owned by one request. The connection closes when the
/// session is dropped.
pub struct Session {
    conn: Connection,
}

impl Session {
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Starts a write transaction. It takes the write lock up front and rolls
    /// back if dropped without `commit`.
    pub fn write(&mut self) -> rusqlite::Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.db"));

        storage.initialize().unwrap();
        storage.initialize().unwrap();

        assert!(storage.path().exists());
        let session = storage.acquire_session().unwrap();
        let count: i64 = session
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'task'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_initialize_fails_when_file_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("missing").join("tasks.db"));

        let err = storage.initialize().unwrap_err();
        assert!(matches!(err, StorageError::Open { .. }));
    }

    #[test]
    fn test_uncommitted_write_rolls_back_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.db"));
        storage.initialize().unwrap();

        {
            let mut session = storage.acquire_session().unwrap();
            let tx = session.write().unwrap();
            tx.execute("INSERT INTO task (title) VALUES ('lost')", [])
                .unwrap();
        }

        let session = storage.acquire_session().unwrap();
        let count: i64 = session
            .conn()
            .query_row("SELECT COUNT(*) FROM task", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
