mod filter;
mod list;
mod mine;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CasesCommands;
use crate::context::AppContext;

/// Handle `csd cases <subcommand>`.
pub async fn handle(
    action: &CasesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CasesCommands::Filter(args) => filter::run(args, ctx, flags).await,
        CasesCommands::List { offset } => list::run(*offset, ctx, flags).await,
        CasesCommands::Mine => mine::run(ctx, flags).await,
    }
}
