use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx).await,
        Commands::Skill { action } => commands::skill::handle(&action, ctx).await,
        Commands::Log { action } => commands::log::handle(&action, ctx).await,
        Commands::Theme { action } => commands::theme::handle(&action, ctx, flags),
    }
}
