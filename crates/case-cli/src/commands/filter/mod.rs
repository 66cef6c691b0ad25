mod apply;
mod delete;
mod list;
mod save;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterCommands;
use crate::context::AppContext;

/// Handle `csd filter <subcommand>`.
pub async fn handle(
    action: &FilterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FilterCommands::List => list::run(ctx, flags).await,
        FilterCommands::Save(args) => save::run(args, ctx, flags).await,
        FilterCommands::Apply(args) => apply::run(args, ctx, flags).await,
        FilterCommands::Delete { name } => delete::run(name, ctx, flags).await,
    }
}
