use arena_config::ArenaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ArenaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ArenaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_env_prefix(&env_keys, "ARENA_AUTH") {
        warnings.push(
            "Auth config appears default while ARENA_AUTH* env vars exist. Use double underscores (example: ARENA_AUTH__SUBJECT)."
                .to_string(),
        );
    }

    if config.hash.salt.is_empty() && has_env_prefix(&env_keys, "ARENA_HASH") {
        warnings.push(
            "Hash salt is empty while ARENA_HASH* env vars exist. Use double underscores (example: ARENA_HASH__SALT)."
                .to_string(),
        );
    }

    if config.activity.severity.is_empty()
        && env_keys
            .iter()
            .any(|key| key.starts_with("ARENA_ACTIVITY_SEVERITY"))
    {
        warnings.push(
            "Activity severity overrides are empty while ARENA_ACTIVITY_SEVERITY* env vars exist. Use double underscores (example: ARENA_ACTIVITY__SEVERITY__USER_LOGIN)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
