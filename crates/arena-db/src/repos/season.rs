//! Season reads. Seasons are referenced, never mutated, by this crate.

use arena_core::entities::Season;

use crate::error::DatabaseError;
use crate::helpers::{get_flag, parse_datetime};
use crate::service::ArenaService;

const SELECT_COLS: &str = "id, slug, name, is_global, created_at";

fn row_to_season(row: &libsql::Row) -> Result<Season, DatabaseError> {
    Ok(Season {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        is_global: get_flag(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// Whether a season with this ID exists.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn season_exists(
    conn: &libsql::Connection,
    season_id: i64,
) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query("SELECT 1 FROM seasons WHERE id = ?1", [season_id])
        .await?;
    Ok(rows.next().await?.is_some())
}

/// # Errors
///
/// Returns `DatabaseError::NoResult` if no season has this ID.
pub async fn get_season(conn: &libsql::Connection, season_id: i64) -> Result<Season, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM seasons WHERE id = ?1"),
            [season_id],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_season(&row)
}

impl ArenaService {
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no season has this ID.
    pub async fn get_season(&self, season_id: i64) -> Result<Season, DatabaseError> {
        get_season(self.db().conn(), season_id).await
    }
}
