//! # arena-db
//!
//! libSQL storage for Arena: users, seasons, teams, memberships and the
//! append-only activity table.
//!
//! The interesting write path is `ArenaService::set_preferences`, which
//! validates a season change against the caller's team membership and commits
//! the user update together with its activity record in one transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Arena state operations.
pub struct ArenaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ArenaDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let arena_db = Self { db, conn };
        arena_db.run_migrations().await?;
        Ok(arena_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
