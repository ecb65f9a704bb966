//! Caller identity used when no auth layer sits in front of the CLI.

use arena_core::identity::AuthIdentity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OAuth subject of the acting user. Empty means unauthenticated.
    #[serde(default)]
    pub subject: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.subject.is_empty()
    }

    /// The configured identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<AuthIdentity> {
        self.is_configured()
            .then(|| AuthIdentity::new(self.subject.clone()))
    }
}
