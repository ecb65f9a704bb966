//! Activity log severity routing.

use std::collections::BTreeMap;

use arena_core::activity_log::SeverityRouting;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_severity() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActivityConfig {
    /// Level used for every kind without an override.
    #[serde(default = "default_severity")]
    pub default_severity: String,

    /// Per-kind overrides, keyed by the stored kind name (e.g. `user_login`).
    #[serde(default)]
    pub severity: BTreeMap<String, String>,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            default_severity: default_severity(),
            severity: BTreeMap::new(),
        }
    }
}

impl ActivityConfig {
    /// Build the routing handed to `ActivityLogger`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a level or kind is not recognized.
    pub fn routing(&self) -> Result<SeverityRouting, ConfigError> {
        SeverityRouting::from_config(
            &self.default_severity,
            self.severity.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
        .map_err(|e| ConfigError::InvalidValue {
            field: "activity".into(),
            reason: e.to_string(),
        })
    }
}
