//! The user preference transaction.
//!
//! Setting the active season also pins the caller's team membership in that
//! season. The user update and its `UserSetPreferences` activity commit
//! together or not at all.

use arena_core::entities::{Activity, NewActivity};
use arena_core::enums::{ActivityKind, EntityKind};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::PreferencesError;
use crate::repos::activity::insert_activity;
use crate::repos::membership::season_membership;
use crate::repos::season::season_exists;
use crate::repos::slug::resolve_identifier;
use crate::repos::user::update_user_preferences;
use crate::service::ArenaService;
use crate::updates::user::UserPreferencesUpdateBuilder;

/// Caller-supplied preference changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPreferences {
    /// Slug or numeric ID of the season to make active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_season_id: Option<String>,
}

impl SetPreferences {
    #[must_use]
    pub fn season(identifier: impl Into<String>) -> Self {
        Self {
            active_season_id: Some(identifier.into()),
        }
    }
}

impl ArenaService {
    /// Set the caller's active season and team membership.
    ///
    /// # Errors
    ///
    /// See [`PreferencesError`]. Nothing is written unless the call succeeds.
    pub async fn set_preferences(
        &self,
        input: Option<&SetPreferences>,
    ) -> Result<(), PreferencesError> {
        self.set_preferences_with_activity(input).await.map(|_| ())
    }

    /// Same as [`ArenaService::set_preferences`], returning the committed activity.
    ///
    /// # Errors
    ///
    /// See [`PreferencesError`].
    pub async fn set_preferences_with_activity(
        &self,
        input: Option<&SetPreferences>,
    ) -> Result<Activity, PreferencesError> {
        let input = input.ok_or(PreferencesError::MissingInput)?;

        let user_id = self
            .caller_id()
            .await
            .map_err(|e| PreferencesError::Unauthenticated { source: Some(e) })?
            .ok_or(PreferencesError::Unauthenticated { source: None })?;

        let season_input = input
            .active_season_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(PreferencesError::MissingInput)?;

        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await
            .map_err(|e| PreferencesError::UpdateUserFailed(e.into()))?;

        match apply_preferences(&tx, user_id, season_input).await {
            Ok(activity) => {
                tx.commit()
                    .await
                    .map_err(|e| PreferencesError::UpdateUserFailed(e.into()))?;
                tracing::debug!(
                    user_id,
                    season_id = activity.season_id,
                    team_member_id = activity.team_member_id,
                    activity_id = activity.id,
                    "preferences committed"
                );
                Ok(activity)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(
                        user_id,
                        error = %rollback_error,
                        "preferences rollback failed"
                    );
                }
                Err(error)
            }
        }
    }
}

async fn apply_preferences(
    conn: &libsql::Connection,
    user_id: i64,
    season_input: &str,
) -> Result<Activity, PreferencesError> {
    let season_id = resolve_identifier(conn, season_input, EntityKind::Season)
        .await
        .map_err(|e| PreferencesError::InvalidSeasonId {
            season_id: 0,
            source: Some(e),
        })?
        .id();
    if season_id == 0 {
        return Err(PreferencesError::MissingInput);
    }

    match season_exists(conn, season_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err(PreferencesError::InvalidSeasonId {
                season_id,
                source: None,
            });
        }
        Err(e) => {
            return Err(PreferencesError::InvalidSeasonId {
                season_id,
                source: Some(e),
            });
        }
    }

    let membership = season_membership(conn, user_id, season_id).await?;

    let update = UserPreferencesUpdateBuilder::new()
        .active_season_id(season_id)
        .active_team_member_id(membership.team_member_id)
        .build();

    let mut activity = NewActivity::new(ActivityKind::UserSetPreferences, user_id);
    activity.user_id = Some(user_id);
    activity.season_id = Some(season_id);
    activity.team_id = Some(membership.team_id);
    activity.team_member_id = Some(membership.team_member_id);

    tracing::debug!(
        user_id,
        update = %serde_json::to_string(&update).unwrap_or_default(),
        "applying preference update"
    );

    let now = Utc::now();
    update_user_preferences(conn, user_id, &update, now)
        .await
        .map_err(PreferencesError::UpdateUserFailed)?;
    insert_activity(conn, &activity, now)
        .await
        .map_err(PreferencesError::UpdateUserFailed)
}
