//! Activity repository.
//!
//! Activities are append-only: this module inserts and reads them, never
//! updates or deletes. Reads can hydrate every populated relation into an
//! `ActivityContext` for the activity logger.

use arena_core::entities::{Activity, ActivityContext, NewActivity, SeasonRef, SlugRef};
use chrono::{DateTime, Utc};

use crate::error::DatabaseError;
use crate::helpers::{get_flag, parse_activity_kind, parse_datetime};
use crate::service::ArenaService;

const SELECT_COLS: &str = "a.id, a.kind, a.author_id, a.user_id, a.agent_id, a.season_id, \
     a.team_id, a.team_member_id, a.season_challenge_id, a.created_at";

/// Activity columns followed by the slug of each relation.
const SELECT_CONTEXT: &str = "SELECT a.id, a.kind, a.author_id, a.user_id, a.agent_id, \
     a.season_id, a.team_id, a.team_member_id, a.season_challenge_id, a.created_at, \
     au.slug, u.slug, ag.slug, s.slug, s.is_global, t.slug, sc.slug
     FROM activities a
     LEFT JOIN users au ON au.id = a.author_id
     LEFT JOIN users u ON u.id = a.user_id
     LEFT JOIN agents ag ON ag.id = a.agent_id
     LEFT JOIN seasons s ON s.id = a.season_id
     LEFT JOIN teams t ON t.id = a.team_id
     LEFT JOIN season_challenges sc ON sc.id = a.season_challenge_id";

fn row_to_activity(row: &libsql::Row) -> Result<Activity, DatabaseError> {
    Ok(Activity {
        id: row.get(0)?,
        kind: parse_activity_kind(&row.get::<String>(1)?)?,
        author_id: row.get(2)?,
        user_id: row.get::<Option<i64>>(3)?,
        agent_id: row.get::<Option<i64>>(4)?,
        season_id: row.get::<Option<i64>>(5)?,
        team_id: row.get::<Option<i64>>(6)?,
        team_member_id: row.get::<Option<i64>>(7)?,
        season_challenge_id: row.get::<Option<i64>>(8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn slug_ref(id: Option<i64>, slug: Option<String>) -> Option<SlugRef> {
    Some(SlugRef::new(id?, slug?))
}

fn row_to_context(row: &libsql::Row) -> Result<ActivityContext, DatabaseError> {
    let activity = row_to_activity(row)?;

    let season = match (activity.season_id, row.get::<Option<String>>(13)?) {
        (Some(id), Some(slug)) => Some(SeasonRef {
            id,
            slug,
            is_global: get_flag(row, 14)?,
        }),
        _ => None,
    };

    Ok(ActivityContext {
        author: slug_ref(Some(activity.author_id), row.get(10)?),
        user: slug_ref(activity.user_id, row.get(11)?),
        agent: slug_ref(activity.agent_id, row.get(12)?),
        season,
        team: slug_ref(activity.team_id, row.get(15)?),
        season_challenge: slug_ref(activity.season_challenge_id, row.get(16)?),
        activity,
    })
}

/// Append an activity and return it with its assigned ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails.
pub async fn insert_activity(
    conn: &libsql::Connection,
    activity: &NewActivity,
    created_at: DateTime<Utc>,
) -> Result<Activity, DatabaseError> {
    let mut rows = conn
        .query(
            "INSERT INTO activities (kind, author_id, user_id, agent_id, season_id, team_id,
                 team_member_id, season_challenge_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING id",
            libsql::params![
                activity.kind.as_str(),
                activity.author_id,
                activity.user_id,
                activity.agent_id,
                activity.season_id,
                activity.team_id,
                activity.team_member_id,
                activity.season_challenge_id,
                created_at.to_rfc3339()
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

    Ok(Activity {
        id: row.get(0)?,
        kind: activity.kind,
        author_id: activity.author_id,
        user_id: activity.user_id,
        agent_id: activity.agent_id,
        season_id: activity.season_id,
        team_id: activity.team_id,
        team_member_id: activity.team_member_id,
        season_challenge_id: activity.season_challenge_id,
        created_at,
    })
}

impl ArenaService {
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no activity has this ID.
    pub async fn get_activity(&self, id: i64) -> Result<Activity, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM activities a WHERE a.id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_activity(&row)
    }

    /// Most recent activities first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row holds an unknown kind.
    pub async fn list_activities(&self, limit: u32) -> Result<Vec<Activity>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM activities a ORDER BY a.id DESC LIMIT ?1"),
                [limit],
            )
            .await?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next().await? {
            activities.push(row_to_activity(&row)?);
        }
        Ok(activities)
    }

    /// Load one activity with its relations dereferenced.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no activity has this ID.
    pub async fn activity_context(&self, id: i64) -> Result<ActivityContext, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{SELECT_CONTEXT} WHERE a.id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_context(&row)
    }

    /// Recent activities with relations, oldest first so they replay in order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row holds an unknown kind.
    pub async fn recent_activity_contexts(
        &self,
        limit: u32,
    ) -> Result<Vec<ActivityContext>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("{SELECT_CONTEXT} ORDER BY a.id DESC LIMIT ?1"),
                [limit],
            )
            .await?;
        let mut contexts = Vec::new();
        while let Some(row) = rows.next().await? {
            contexts.push(row_to_context(&row)?);
        }
        contexts.reverse();
        Ok(contexts)
    }
}
