//! Row parsing helpers shared by the repos.
//!
//! Handles the dual datetime format issue (`SQLite`'s `datetime('now')` vs
//! Rust's `to_rfc3339()`) and maps entity kinds to their tables.

use arena_core::enums::{ActivityKind, EntityKind};
use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse the stored `kind` column of an activity.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a kind this build does not know.
pub fn parse_activity_kind(s: &str) -> Result<ActivityKind, DatabaseError> {
    s.parse()
        .map_err(|e| DatabaseError::InvalidState(format!("activity kind: {e}")))
}

/// Read an INTEGER column holding a boolean flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Map `EntityKind` to the table holding its `slug` column.
///
/// Uses exhaustive match: adding a new `EntityKind` variant forces updating this.
#[must_use]
pub const fn entity_kind_to_table(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "users",
        EntityKind::Season => "seasons",
        EntityKind::Team => "teams",
        EntityKind::Agent => "agents",
        EntityKind::SeasonChallenge => "season_challenges",
    }
}
