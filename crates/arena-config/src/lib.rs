//! # arena-config
//!
//! Layered configuration loading for Arena using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ARENA_*` prefix, `__` as separator)
//! 2. Project-level `.arena/config.toml`
//! 3. User-level `~/.config/arena/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ARENA_DATABASE__PATH` -> `database.path`,
//! `ARENA_ACTIVITY__SEVERITY__USER_LOGIN` -> `activity.severity.user_login`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use arena_config::ArenaConfig;
//!
//! let config = ArenaConfig::load_with_dotenv().expect("config");
//! let routing = config.activity.routing().expect("severity routing");
//! ```

mod activity;
mod auth;
mod database;
mod error;
mod hash;

pub use activity::ActivityConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use hash::HashConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub hash: HashConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
}

impl ArenaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after loading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".arena/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ARENA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("arena").join("config.toml"))
    }
}
