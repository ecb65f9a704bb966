//! Slug-or-ID resolution for any slugged entity kind.

use arena_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::entity_kind_to_table;
use crate::service::ArenaService;

/// Result of resolving a caller-supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(i64),
    Unresolved,
}

impl Resolution {
    /// The resolved ID, or `0` when nothing matched.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Resolved(id) => id,
            Self::Unresolved => 0,
        }
    }
}

/// Look up the ID of the entity of `kind` whose slug is `slug`.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails. A missing slug is `Ok(None)`.
pub async fn resolve_id_by_slug_and_kind(
    conn: &libsql::Connection,
    slug: &str,
    kind: EntityKind,
) -> Result<Option<i64>, DatabaseError> {
    let table = entity_kind_to_table(kind);
    let mut rows = conn
        .query(&format!("SELECT id FROM {table} WHERE slug = ?1"), [slug])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<i64>(0)?)),
        None => Ok(None),
    }
}

/// Resolve a slug, falling back to parsing the input as a base-10 integer.
///
/// The integer path is only tried when no entity has that slug. A parsed ID is
/// not checked for existence; callers validate it.
///
/// # Errors
///
/// Returns `DatabaseError` if the slug query fails.
pub async fn resolve_identifier(
    conn: &libsql::Connection,
    input: &str,
    kind: EntityKind,
) -> Result<Resolution, DatabaseError> {
    if let Some(id) = resolve_id_by_slug_and_kind(conn, input, kind).await? {
        return Ok(Resolution::Resolved(id));
    }
    Ok(input
        .parse::<i64>()
        .map_or(Resolution::Unresolved, Resolution::Resolved))
}

impl ArenaService {
    /// Resolve a slug or numeric ID for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the slug query fails.
    pub async fn resolve_identifier(
        &self,
        input: &str,
        kind: EntityKind,
    ) -> Result<Resolution, DatabaseError> {
        resolve_identifier(self.db().conn(), input, kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_season, seed_user, test_service};
    use rstest::rstest;

    #[tokio::test]
    async fn slug_resolves_to_id() {
        let svc = test_service().await;
        seed_season(&svc, 7, "spring-2024", false).await;

        let resolved = svc
            .resolve_identifier("spring-2024", EntityKind::Season)
            .await
            .unwrap();
        assert_eq!(resolved, Resolution::Resolved(7));
    }

    #[tokio::test]
    async fn slug_lookup_is_scoped_to_kind() {
        let svc = test_service().await;
        seed_user(&svc, 3, "spring-2024").await;

        let found = resolve_id_by_slug_and_kind(svc.db().conn(), "spring-2024", EntityKind::Season)
            .await
            .unwrap();
        assert_eq!(found, None);

        let found = resolve_id_by_slug_and_kind(svc.db().conn(), "spring-2024", EntityKind::User)
            .await
            .unwrap();
        assert_eq!(found, Some(3));
    }

    #[rstest]
    #[case("7", Resolution::Resolved(7))]
    #[case("+12", Resolution::Resolved(12))]
    #[case("0", Resolution::Resolved(0))]
    #[case(" 7", Resolution::Unresolved)]
    #[case("7a", Resolution::Unresolved)]
    #[case("", Resolution::Unresolved)]
    #[tokio::test]
    async fn falls_back_to_integer(#[case] input: &str, #[case] expected: Resolution) {
        let svc = test_service().await;
        let resolved = svc
            .resolve_identifier(input, EntityKind::Season)
            .await
            .unwrap();
        assert_eq!(resolved, expected);
    }

    #[tokio::test]
    async fn numeric_slug_wins_over_parsing() {
        let svc = test_service().await;
        seed_season(&svc, 7, "2024", false).await;

        let resolved = svc.resolve_identifier("2024", EntityKind::Season).await.unwrap();
        assert_eq!(resolved, Resolution::Resolved(7));
    }

    #[test]
    fn unresolved_id_is_zero() {
        assert_eq!(Resolution::Unresolved.id(), 0);
        assert_eq!(Resolution::Resolved(5).id(), 5);
    }
}
