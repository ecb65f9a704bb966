use anyhow::Context;
use arena_core::activity_log::TracingSink;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &ActivityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ActivityCommands::List(args) => {
            let activities = ctx
                .service
                .list_activities(args.limit)
                .await
                .context("failed to list activities")?;
            output(&activities, flags.format)
        }
        ActivityCommands::Log(args) => {
            let contexts = ctx
                .service
                .recent_activity_contexts(args.limit)
                .await
                .context("failed to load activities")?;
            for activity_ctx in &contexts {
                ctx.logger.log(activity_ctx, &TracingSink);
            }
            Ok(())
        }
    }
}
