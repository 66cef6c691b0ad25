use serde::Serialize;

use case_core::entities::CaseRow;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::commands::shared::paging::effective_page;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClaimsTableResponse {
    rows: Vec<CaseRow>,
    count: usize,
    limit: u32,
    offset: u32,
}

pub async fn run(
    offset: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::VIEW_CASES)?;

    let (limit, offset) =
        effective_page(offset, flags.limit, ctx.config.general.default_limit);
    let rows = ctx
        .client
        .claims_table(&ctx.session, limit, offset)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    output(
        &ClaimsTableResponse {
            count: rows.len(),
            rows,
            limit,
            offset,
        },
        flags.format,
    )
}
