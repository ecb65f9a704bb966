use clap::{Args, Subcommand};

/// Activity audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// List recent activities, newest first.
    List(ActivityListArgs),
    /// Replay recent activities through the activity logger.
    Log(ActivityListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ActivityListArgs {
    /// Max activities to read.
    #[arg(long, default_value_t = 20)]
    pub limit: u32,
}
