use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user and their stored preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub slug: String,
    pub username: String,
    pub oauth_subject: String,
    /// Season the user is currently playing.
    pub active_season_id: Option<i64>,
    /// The user's membership in a team of the active season.
    pub active_team_member_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
