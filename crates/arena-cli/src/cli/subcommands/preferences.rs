use clap::{Args, Subcommand};

/// Preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PreferencesCommands {
    /// Set the active season (and with it the team membership).
    Set(PreferencesSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PreferencesSetArgs {
    /// Season slug or numeric ID.
    #[arg(long)]
    pub season: Option<String>,
}
