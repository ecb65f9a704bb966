use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-scoped competition grouping teams and challenges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Season {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Global seasons are open to every user; teams there are implicit.
    pub is_global: bool,
    pub created_at: DateTime<Utc>,
}
