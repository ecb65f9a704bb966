use arena_core::activity_log::{LogSink, TracingSink};
use arena_db::repos::preferences::SetPreferences;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PreferencesCommands;
use crate::cli::subcommands::preferences::PreferencesSetArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SetResponse {
    ok: bool,
}

pub async fn handle(
    action: &PreferencesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PreferencesCommands::Set(args) => handle_set(args, ctx, flags).await,
    }
}

async fn handle_set(
    args: &PreferencesSetArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = SetPreferences {
        active_season_id: args.season.clone(),
    };

    let activity = ctx
        .service
        .set_preferences_with_activity(Some(&input))
        .await
        .map_err(|error| {
            let code = error.code();
            anyhow::Error::new(error).context(code)
        })?;

    log_committed(ctx, activity.id, &TracingSink).await;

    output(&SetResponse { ok: true }, flags.format)
}

/// Emit the audit log line for an already committed activity.
///
/// The update is durable at this point, so a failed read only warns.
async fn log_committed(ctx: &AppContext, activity_id: i64, sink: &dyn LogSink) {
    match ctx.service.activity_context(activity_id).await {
        Ok(activity_ctx) => ctx.logger.log(&activity_ctx, sink),
        Err(error) => tracing::warn!(
            activity_id,
            %error,
            "preferences committed but activity could not be loaded for logging"
        ),
    }
}
