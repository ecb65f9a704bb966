use std::path::Path;

use anyhow::Context;
use arena_config::ArenaConfig;
use arena_core::activity_log::ActivityLogger;
use arena_db::service::ArenaService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ArenaService,
    pub config: ArenaConfig,
    pub logger: ActivityLogger,
}

impl AppContext {
    /// Open the database and build the activity logger from configuration.
    ///
    /// A bad severity in `activity.*` fails here, before any command runs.
    pub async fn init(config: ArenaConfig) -> anyhow::Result<Self> {
        let routing = config
            .activity
            .routing()
            .context("invalid activity log configuration")?;

        if !config.database.is_in_memory() {
            ensure_parent_dir(Path::new(&config.database.path))?;
        }

        let service = ArenaService::new_local(&config.database.path, config.auth.identity())
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        Ok(Self {
            service,
            config,
            logger: ActivityLogger::new(routing),
        })
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use arena_config::{ActivityConfig, DatabaseConfig};

    use super::*;

    #[tokio::test]
    async fn init_creates_database_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("arena.db");
        let config = ArenaConfig {
            database: DatabaseConfig {
                path: path.to_string_lossy().into_owned(),
            },
            ..Default::default()
        };

        let ctx = AppContext::init(config).await.expect("context should init");
        assert!(path.parent().is_some_and(Path::is_dir));
        assert!(ctx.service.identity().is_none());
    }

    #[tokio::test]
    async fn bad_severity_fails_startup() {
        let config = ArenaConfig {
            database: DatabaseConfig {
                path: ":memory:".into(),
            },
            activity: ActivityConfig {
                default_severity: "loud".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(AppContext::init(config).await.is_err());
    }
}
