//! Error types for arena-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Outcome of looking up a user's team in one season, other than success.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The user has not joined a team in this season yet.
    #[error("user {user_id} has no team in season {season_id}")]
    NoTeamForSeason { user_id: i64, season_id: i64 },

    /// More than one membership exists. This is an integrity fault.
    #[error("user {user_id} has {count} team memberships in season {season_id}")]
    Ambiguous {
        user_id: i64,
        season_id: i64,
        count: usize,
    },

    #[error(transparent)]
    Query(#[from] DatabaseError),
}

impl From<libsql::Error> for MembershipError {
    fn from(error: libsql::Error) -> Self {
        Self::Query(DatabaseError::LibSql(error))
    }
}

/// Caller-visible failures of `ArenaService::set_preferences`.
///
/// Every variant maps to a stable code through [`PreferencesError::code`] so
/// the transport layer can translate it.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("missing input")]
    MissingInput,

    /// The caller could not be mapped to a user. `source` is set when the
    /// lookup itself failed.
    #[error("unauthenticated")]
    Unauthenticated {
        #[source]
        source: Option<DatabaseError>,
    },

    #[error("invalid season ID {season_id}")]
    InvalidSeasonId {
        season_id: i64,
        #[source]
        source: Option<DatabaseError>,
    },

    #[error("cannot get active season membership: {count} memberships in season {season_id}")]
    AmbiguousMembership { season_id: i64, count: usize },

    #[error("cannot get active season membership")]
    MembershipLookup(#[source] DatabaseError),

    #[error("user has no team for season {season_id}")]
    UserHasNoTeamForSeason { season_id: i64 },

    #[error("update user failed")]
    UpdateUserFailed(#[source] DatabaseError),
}

impl PreferencesError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "ERR_MISSING_INPUT",
            Self::Unauthenticated { .. } => "ERR_UNAUTHENTICATED",
            Self::InvalidSeasonId { .. } => "ERR_INVALID_SEASON_ID",
            Self::AmbiguousMembership { .. } | Self::MembershipLookup(_) => {
                "ERR_GET_ACTIVE_SEASON_MEMBERSHIP"
            }
            Self::UserHasNoTeamForSeason { .. } => "ERR_USER_HAS_NO_TEAM_FOR_SEASON",
            Self::UpdateUserFailed(_) => "ERR_UPDATE_USER",
        }
    }
}

impl From<MembershipError> for PreferencesError {
    fn from(error: MembershipError) -> Self {
        match error {
            MembershipError::NoTeamForSeason { season_id, .. } => {
                Self::UserHasNoTeamForSeason { season_id }
            }
            MembershipError::Ambiguous {
                season_id, count, ..
            } => Self::AmbiguousMembership { season_id, count },
            MembershipError::Query(e) => Self::MembershipLookup(e),
        }
    }
}
