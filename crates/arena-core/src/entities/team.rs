use serde::{Deserialize, Serialize};

/// The team and membership a user holds in one season.
///
/// A team belongs to exactly one season, and for a given (user, season) pair
/// at most one membership may exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonMembership {
    pub team_id: i64,
    pub team_member_id: i64,
}
