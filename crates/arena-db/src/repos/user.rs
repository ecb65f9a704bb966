//! User reads and preference writes.

use arena_core::entities::User;
use chrono::{DateTime, Utc};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ArenaService;
use crate::updates::user::UserPreferencesUpdate;

const SELECT_COLS: &str = "id, slug, username, oauth_subject, active_season_id, \
     active_team_member_id, created_at, updated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        slug: row.get(1)?,
        username: row.get(2)?,
        oauth_subject: row.get(3)?,
        active_season_id: row.get::<Option<i64>>(4)?,
        active_team_member_id: row.get::<Option<i64>>(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// # Errors
///
/// Returns `DatabaseError::NoResult` if no user has this ID.
pub async fn get_user(conn: &libsql::Connection, user_id: i64) -> Result<User, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
            [user_id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_user(&row)
}

/// Map an OAuth subject to the owning user's ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn user_id_by_subject(
    conn: &libsql::Connection,
    subject: &str,
) -> Result<Option<i64>, DatabaseError> {
    let mut rows = conn
        .query("SELECT id FROM users WHERE oauth_subject = ?1", [subject])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<i64>(0)?)),
        None => Ok(None),
    }
}

/// Apply a preference update to one user row.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if the user row does not exist, or
/// `DatabaseError` if the UPDATE fails.
pub async fn update_user_preferences(
    conn: &libsql::Connection,
    user_id: i64,
    update: &UserPreferencesUpdate,
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    if let Some(season_id) = update.active_season_id {
        sets.push(format!("active_season_id = ?{idx}"));
        params.push(season_id.into());
        idx += 1;
    }
    if let Some(team_member_id) = update.active_team_member_id {
        sets.push(format!("active_team_member_id = ?{idx}"));
        params.push(team_member_id.into());
        idx += 1;
    }

    if sets.is_empty() {
        return Err(DatabaseError::InvalidState(
            "empty preference update".into(),
        ));
    }

    sets.push(format!("updated_at = ?{idx}"));
    params.push(now.to_rfc3339().into());
    idx += 1;

    params.push(user_id.into());
    let sql = format!("UPDATE users SET {} WHERE id = ?{idx}", sets.join(", "));
    let changed = conn.execute(&sql, libsql::params_from_iter(params)).await?;
    if changed == 0 {
        return Err(DatabaseError::NoResult);
    }
    Ok(())
}

impl ArenaService {
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this ID.
    pub async fn get_user(&self, user_id: i64) -> Result<User, DatabaseError> {
        get_user(self.db().conn(), user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_user, subject_for, test_service};
    use crate::updates::user::UserPreferencesUpdateBuilder;

    #[tokio::test]
    async fn get_user_roundtrip() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;

        let user = svc.get_user(1).await.unwrap();
        assert_eq!(user.slug, "alice");
        assert_eq!(user.oauth_subject, subject_for("alice"));
        assert_eq!(user.active_season_id, None);
        assert_eq!(user.active_team_member_id, None);
    }

    #[tokio::test]
    async fn subject_lookup() {
        let svc = test_service().await;
        seed_user(&svc, 4, "dora").await;

        let conn = svc.db().conn();
        assert_eq!(user_id_by_subject(conn, "sub|dora").await.unwrap(), Some(4));
        assert_eq!(user_id_by_subject(conn, "sub|nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn partial_update_only_touches_given_columns() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;
        svc.db()
            .conn()
            .execute("INSERT INTO seasons (id, slug) VALUES (7, 'spring-2024')", ())
            .await
            .unwrap();

        let update = UserPreferencesUpdateBuilder::new().active_season_id(7).build();
        update_user_preferences(svc.db().conn(), 1, &update, Utc::now())
            .await
            .unwrap();

        let user = svc.get_user(1).await.unwrap();
        assert_eq!(user.active_season_id, Some(7));
        assert_eq!(user.active_team_member_id, None);
    }

    #[tokio::test]
    async fn update_missing_user_fails() {
        let svc = test_service().await;
        svc.db()
            .conn()
            .execute("INSERT INTO seasons (id, slug) VALUES (7, 'spring-2024')", ())
            .await
            .unwrap();

        let update = UserPreferencesUpdateBuilder::new().active_season_id(7).build();
        let result = update_user_preferences(svc.db().conn(), 99, &update, Utc::now()).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;

        let update = UserPreferencesUpdateBuilder::new().build();
        let result = update_user_preferences(svc.db().conn(), 1, &update, Utc::now()).await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }
}
