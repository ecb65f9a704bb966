use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ActivityKind;

/// An append-only audit entry recording one state-changing action.
///
/// Optional references stay `None` when the action does not involve that
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub kind: ActivityKind,
    pub author_id: i64,
    pub user_id: Option<i64>,
    pub agent_id: Option<i64>,
    pub season_id: Option<i64>,
    pub team_id: Option<i64>,
    pub team_member_id: Option<i64>,
    pub season_challenge_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// An activity that has not been persisted yet.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub author_id: i64,
    pub user_id: Option<i64>,
    pub agent_id: Option<i64>,
    pub season_id: Option<i64>,
    pub team_id: Option<i64>,
    pub team_member_id: Option<i64>,
    pub season_challenge_id: Option<i64>,
}

impl NewActivity {
    #[must_use]
    pub const fn new(kind: ActivityKind, author_id: i64) -> Self {
        Self {
            kind,
            author_id,
            user_id: None,
            agent_id: None,
            season_id: None,
            team_id: None,
            team_member_id: None,
            season_challenge_id: None,
        }
    }
}

/// A related entity reduced to what the activity log needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlugRef {
    pub id: i64,
    pub slug: String,
}

impl SlugRef {
    #[must_use]
    pub fn new(id: i64, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
        }
    }
}

/// Season reference carrying the global flag, which gates the team field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonRef {
    pub id: i64,
    pub slug: String,
    pub is_global: bool,
}

/// An activity with every populated relation dereferenced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityContext {
    pub activity: Activity,
    pub author: Option<SlugRef>,
    pub user: Option<SlugRef>,
    pub agent: Option<SlugRef>,
    pub season: Option<SeasonRef>,
    pub team: Option<SlugRef>,
    pub season_challenge: Option<SlugRef>,
}

impl ActivityContext {
    /// Wrap an activity with no relations loaded.
    #[must_use]
    pub const fn bare(activity: Activity) -> Self {
        Self {
            activity,
            author: None,
            user: None,
            agent: None,
            season: None,
            team: None,
            season_challenge: None,
        }
    }
}
