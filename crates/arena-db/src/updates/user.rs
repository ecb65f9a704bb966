//! User preference update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_season_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_team_member_id: Option<i64>,
}

impl UserPreferencesUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active_season_id.is_none() && self.active_team_member_id.is_none()
    }
}

pub struct UserPreferencesUpdateBuilder(UserPreferencesUpdate);

impl UserPreferencesUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UserPreferencesUpdate::default())
    }

    #[must_use]
    pub const fn active_season_id(mut self, season_id: i64) -> Self {
        self.0.active_season_id = Some(season_id);
        self
    }

    #[must_use]
    pub const fn active_team_member_id(mut self, team_member_id: i64) -> Self {
        self.0.active_team_member_id = Some(team_member_id);
        self
    }

    #[must_use]
    pub fn build(self) -> UserPreferencesUpdate {
        self.0
    }
}

impl Default for UserPreferencesUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let update = UserPreferencesUpdateBuilder::new()
            .active_season_id(7)
            .active_team_member_id(9)
            .build();
        assert_eq!(update.active_season_id, Some(7));
        assert_eq!(update.active_team_member_id, Some(9));
        assert!(!update.is_empty());
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let update = UserPreferencesUpdateBuilder::new().build();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }
}
