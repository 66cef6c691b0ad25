use case_core::filter::CaseFilterRequest;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::cases::CasesFilterArgs;
use crate::commands::shared::apply::apply_and_render;
use crate::commands::shared::criteria;
use crate::commands::shared::paging::effective_page;
use crate::context::AppContext;

pub async fn run(
    args: &CasesFilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::VIEW_CASES)?;

    let draft = criteria::draft_from_args(&args.criteria);
    let normalized = draft.normalize();
    criteria::warn_dropped(&draft, &normalized);

    let (limit, offset) =
        effective_page(args.offset, flags.limit, ctx.config.general.default_limit);
    let request = CaseFilterRequest::new(normalized).with_page(limit, offset);

    apply_and_render(&request, ctx, flags).await
}
