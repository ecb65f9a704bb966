//! Service layer orchestrating validated mutations with their activity records.
//!
//! `ArenaService` wraps `ArenaDb` (raw database access) and the identity of
//! the caller. All repo methods are implemented as `impl ArenaService`.

use arena_core::identity::AuthIdentity;

use crate::ArenaDb;
use crate::error::DatabaseError;
use crate::repos::user::user_id_by_subject;

/// Orchestrates database mutations with their activity records.
///
/// Every state-changing method follows this protocol:
/// 1. Resolve and validate input
/// 2. Begin transaction
/// 3. Re-validate against the transaction's snapshot
/// 4. Apply the change and insert the activity
/// 5. Commit (or roll back on any error)
pub struct ArenaService {
    db: ArenaDb,
    identity: Option<AuthIdentity>,
}

impl ArenaService {
    /// Create a new service over a local database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = ArenaDb::open_local(db_path).await?;
        Ok(Self { db, identity })
    }

    /// Create from an existing `ArenaDb` (for testing).
    #[must_use]
    pub const fn from_db(db: ArenaDb, identity: Option<AuthIdentity>) -> Self {
        Self { db, identity }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ArenaDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// Resolve the caller to a stored user ID.
    ///
    /// Returns `None` when no identity is attached or no user owns the subject.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup query fails.
    pub async fn caller_id(&self) -> Result<Option<i64>, DatabaseError> {
        match &self.identity {
            Some(identity) => user_id_by_subject(self.db.conn(), &identity.subject).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{seed_user, test_service, test_service_as};

    #[tokio::test]
    async fn caller_without_identity_is_none() {
        let svc = test_service().await;
        assert_eq!(svc.caller_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn caller_resolves_by_subject() {
        let svc = test_service_as("alice").await;
        seed_user(&svc, 3, "alice").await;
        assert_eq!(svc.caller_id().await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn unknown_subject_is_none() {
        let svc = test_service_as("mallory").await;
        seed_user(&svc, 3, "alice").await;
        assert_eq!(svc.caller_id().await.unwrap(), None);
    }
}
