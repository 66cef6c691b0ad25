use serde::Serialize;

use case_core::entities::SavedFilters;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SavedFilterListResponse {
    filters: SavedFilters,
    count: usize,
}

/// List saved filters.
///
/// A fetch failure degrades to an empty list instead of failing the
/// command; the saved-filter strip is an aid, not a prerequisite.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::VIEW_CASES)?;

    let filters = match ctx.client.fetch_saved_filters(&ctx.session).await {
        Ok(filters) => filters,
        Err(error) => {
            tracing::warn!(%error, "failed to fetch saved filters; showing none");
            SavedFilters::new()
        }
    };

    output(
        &SavedFilterListResponse {
            count: filters.len(),
            filters,
        },
        flags.format,
    )
}
