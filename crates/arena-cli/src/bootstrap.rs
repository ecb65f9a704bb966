use anyhow::Context;
use arena_config::ArenaConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ArenaConfig> {
    let config = ArenaConfig::load_with_dotenv().context("failed to load arena configuration")?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: ArenaConfig, flags: &GlobalFlags) -> ArenaConfig {
    if let Some(subject) = &flags.subject {
        config.auth.subject.clone_from(subject);
    }
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    config
}
