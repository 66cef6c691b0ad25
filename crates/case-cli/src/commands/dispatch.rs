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
        Commands::Cases { action } => commands::cases::handle(&action, ctx, flags).await,
        Commands::Filter { action } => commands::filter::handle(&action, ctx, flags).await,
        Commands::Notifications { action } => {
            commands::notifications::handle(&action, ctx, flags).await
        }
        Commands::Analytics(args) => commands::analytics::handle(&args, ctx, flags).await,
        Commands::Auth { .. } | Commands::Schema(_) | Commands::Init(_) => {
            unreachable!("auth/schema/init are pre-dispatched in main")
        }
    }
}
