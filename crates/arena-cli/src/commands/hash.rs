use arena_config::ArenaConfig;
use arena_core::hash::challenge_instance_prefix_hash;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HashArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HashResponse {
    instance: String,
    user: i64,
    hash: String,
}

pub fn handle(args: &HashArgs, config: &ArenaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&compute(args, config)?, flags.format)
}

fn compute(args: &HashArgs, config: &ArenaConfig) -> anyhow::Result<HashResponse> {
    let salt = args.salt.as_deref().unwrap_or(&config.hash.salt);
    let hash = challenge_instance_prefix_hash(&args.instance, args.user, salt)?;
    Ok(HashResponse {
        instance: args.instance.clone(),
        user: args.user,
        hash,
    })
}
