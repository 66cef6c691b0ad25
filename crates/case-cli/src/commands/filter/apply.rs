use case_core::filter::CaseFilterRequest;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::filter::FilterApplyArgs;
use crate::commands::shared::apply::apply_and_render;
use crate::commands::shared::paging::effective_page;
use crate::context::AppContext;

/// Re-run a saved filter's criteria against the case list.
pub async fn run(args: &FilterApplyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::VIEW_CASES)?;

    let filters = ctx
        .client
        .fetch_saved_filters(&ctx.session)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    let name = args.name.trim();
    let Some(record) = filters.get(name) else {
        anyhow::bail!("no saved filter named '{name}'");
    };

    let (limit, offset) =
        effective_page(args.offset, flags.limit, ctx.config.general.default_limit);
    let request = CaseFilterRequest::new(record.criteria.clone()).with_page(limit, offset);

    apply_and_render(&request, ctx, flags).await
}
