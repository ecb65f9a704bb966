//! Challenge-instance handle settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HashConfig {
    /// Salt mixed into every challenge-instance handle.
    #[serde(default)]
    pub salt: String,
}
