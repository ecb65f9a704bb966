//! Team membership lookup scoped to one season.
//!
//! A user may belong to at most one team per season. The season is a property
//! of the team, so the rule cannot be a table constraint and is checked here.

use arena_core::entities::SeasonMembership;

use crate::error::MembershipError;
use crate::service::ArenaService;

/// Find the user's unique team membership in `season_id`.
///
/// Membership and team IDs come from the same joined row, ordered by
/// membership ID.
///
/// # Errors
///
/// - `MembershipError::NoTeamForSeason` when the user has not joined a team.
/// - `MembershipError::Ambiguous` when more than one membership exists; the
///   caller must abort rather than pick one.
/// - `MembershipError::Query` if the query fails.
pub async fn season_membership(
    conn: &libsql::Connection,
    user_id: i64,
    season_id: i64,
) -> Result<SeasonMembership, MembershipError> {
    let mut rows = conn
        .query(
            "SELECT tm.id, t.id
             FROM team_members tm
             JOIN teams t ON t.id = tm.team_id
             WHERE tm.user_id = ?1 AND t.season_id = ?2
             ORDER BY tm.id",
            libsql::params![user_id, season_id],
        )
        .await?;

    let mut found = Vec::new();
    while let Some(row) = rows.next().await? {
        found.push(SeasonMembership {
            team_member_id: row.get(0)?,
            team_id: row.get(1)?,
        });
    }

    match found.as_slice() {
        [membership] => Ok(*membership),
        [] => Err(MembershipError::NoTeamForSeason { user_id, season_id }),
        many => Err(MembershipError::Ambiguous {
            user_id,
            season_id,
            count: many.len(),
        }),
    }
}

impl ArenaService {
    /// # Errors
    ///
    /// See [`season_membership`].
    pub async fn season_membership(
        &self,
        user_id: i64,
        season_id: i64,
    ) -> Result<SeasonMembership, MembershipError> {
        season_membership(self.db().conn(), user_id, season_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{
        seed_member, seed_season, seed_team, seed_user, test_service,
    };

    #[tokio::test]
    async fn single_membership_is_returned() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;
        seed_season(&svc, 7, "spring-2024", false).await;
        seed_team(&svc, 42, "red-team", 7).await;
        seed_member(&svc, 9, 42, 1).await;

        let membership = svc.season_membership(1, 7).await.unwrap();
        assert_eq!(
            membership,
            SeasonMembership {
                team_id: 42,
                team_member_id: 9
            }
        );
    }

    #[tokio::test]
    async fn no_membership_in_season() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;
        seed_season(&svc, 7, "spring-2024", false).await;
        seed_season(&svc, 8, "summer-2024", false).await;
        seed_team(&svc, 42, "red-team", 8).await;
        seed_member(&svc, 9, 42, 1).await;

        let err = svc.season_membership(1, 7).await.unwrap_err();
        assert!(matches!(
            err,
            MembershipError::NoTeamForSeason {
                user_id: 1,
                season_id: 7
            }
        ));
    }

    #[tokio::test]
    async fn other_users_memberships_are_ignored() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;
        seed_user(&svc, 2, "bob").await;
        seed_season(&svc, 7, "spring-2024", false).await;
        seed_team(&svc, 42, "red-team", 7).await;
        seed_member(&svc, 9, 42, 1).await;
        seed_member(&svc, 10, 42, 2).await;

        let membership = svc.season_membership(2, 7).await.unwrap();
        assert_eq!(membership.team_member_id, 10);
    }

    #[tokio::test]
    async fn two_teams_in_one_season_is_ambiguous() {
        let svc = test_service().await;
        seed_user(&svc, 1, "alice").await;
        seed_season(&svc, 7, "spring-2024", false).await;
        seed_team(&svc, 42, "red-team", 7).await;
        seed_team(&svc, 43, "blue-team", 7).await;
        seed_member(&svc, 9, 42, 1).await;
        seed_member(&svc, 11, 43, 1).await;

        let err = svc.season_membership(1, 7).await.unwrap_err();
        assert!(matches!(err, MembershipError::Ambiguous { count: 2, .. }));
    }
}
