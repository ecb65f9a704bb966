use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Preferences { action } => commands::preferences::handle(&action, ctx, flags).await,
        Commands::Activity { action } => commands::activity::handle(&action, ctx, flags).await,
        Commands::Hash(args) => commands::hash::handle(&args, &ctx.config, flags),
    }
}
