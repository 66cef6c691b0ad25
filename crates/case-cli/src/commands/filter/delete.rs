use serde::Serialize;

use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FilterDeleteResponse {
    name: String,
    deleted: bool,
    /// Filters still saved after the refresh; absent when the refresh
    /// fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<usize>,
}

pub async fn run(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::MANAGE_FILTERS)?;

    ctx.client
        .delete_filter(&ctx.session, name)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    let remaining = match ctx.client.fetch_saved_filters(&ctx.session).await {
        Ok(filters) => Some(filters.len()),
        Err(error) => {
            tracing::warn!(%error, "deleted, but refreshing the filter list failed");
            None
        }
    };

    output(
        &FilterDeleteResponse {
            name: name.trim().to_string(),
            deleted: true,
            remaining,
        },
        flags.format,
    )
}
