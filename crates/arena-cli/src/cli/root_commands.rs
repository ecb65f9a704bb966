use clap::{Args, Subcommand};

use crate::cli::subcommands::{ActivityCommands, PreferencesCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Caller preferences.
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommands,
    },
    /// Activity audit trail.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Short per-user handle of a challenge instance.
    Hash(HashArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HashArgs {
    /// Challenge instance identifier.
    #[arg(long)]
    pub instance: String,
    /// Numeric user ID.
    #[arg(long)]
    pub user: i64,
    /// Salt (defaults to hash.salt).
    #[arg(long)]
    pub salt: Option<String>,
}
