//! Shared test fixtures for arena-db.
//!
//! Fixtures insert rows with explicit IDs so tests can assert on them.
//! A seeded user's OAuth subject is `sub|{slug}`.

#[cfg(test)]
pub(crate) mod helpers {
    use arena_core::identity::AuthIdentity;

    use crate::ArenaDb;
    use crate::service::ArenaService;

    pub fn subject_for(slug: &str) -> String {
        format!("sub|{slug}")
    }

    /// In-memory service with no caller identity.
    pub async fn test_service() -> ArenaService {
        let db = ArenaDb::open_local(":memory:").await.unwrap();
        ArenaService::from_db(db, None)
    }

    /// In-memory service acting as the user seeded with `slug`.
    pub async fn test_service_as(slug: &str) -> ArenaService {
        let db = ArenaDb::open_local(":memory:").await.unwrap();
        ArenaService::from_db(db, Some(AuthIdentity::new(subject_for(slug))))
    }

    pub async fn seed_user(svc: &ArenaService, id: i64, slug: &str) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO users (id, slug, username, oauth_subject) VALUES (?1, ?2, ?2, ?3)",
                libsql::params![id, slug, subject_for(slug)],
            )
            .await
            .unwrap();
    }

    pub async fn seed_season(svc: &ArenaService, id: i64, slug: &str, is_global: bool) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO seasons (id, slug, name, is_global) VALUES (?1, ?2, ?2, ?3)",
                libsql::params![id, slug, i64::from(is_global)],
            )
            .await
            .unwrap();
    }

    pub async fn seed_team(svc: &ArenaService, id: i64, slug: &str, season_id: i64) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO teams (id, slug, season_id) VALUES (?1, ?2, ?3)",
                libsql::params![id, slug, season_id],
            )
            .await
            .unwrap();
    }

    pub async fn seed_member(svc: &ArenaService, id: i64, team_id: i64, user_id: i64) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO team_members (id, team_id, user_id) VALUES (?1, ?2, ?3)",
                libsql::params![id, team_id, user_id],
            )
            .await
            .unwrap();
    }

    pub async fn seed_agent(svc: &ArenaService, id: i64, slug: &str) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO agents (id, slug) VALUES (?1, ?2)",
                libsql::params![id, slug],
            )
            .await
            .unwrap();
    }

    pub async fn seed_season_challenge(svc: &ArenaService, id: i64, slug: &str, season_id: i64) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO season_challenges (id, slug, season_id) VALUES (?1, ?2, ?3)",
                libsql::params![id, slug, season_id],
            )
            .await
            .unwrap();
    }

    /// Count rows in a table.
    pub async fn count_rows(svc: &ArenaService, table: &str) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    /// The canonical fixture: user `alice` (1) in team 42 (member 9) of season
    /// 7 `spring-2024`, plus the global season 1.
    pub async fn seed_spring_season(svc: &ArenaService) {
        seed_user(svc, 1, "alice").await;
        seed_season(svc, 1, "global", true).await;
        seed_season(svc, 7, "spring-2024", false).await;
        seed_team(svc, 42, "red-team", 7).await;
        seed_member(svc, 9, 42, 1).await;
    }
}
