use serde::Serialize;

use case_core::entities::SavedFilterRecord;
use case_core::filter::FilterCriteria;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::filter::FilterSaveArgs;
use crate::commands::shared::criteria;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FilterSaveResponse {
    name: String,
    saved: bool,
    criteria: FilterCriteria,
    /// The stored record as the backend reports it after the refresh;
    /// absent when the refresh fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<SavedFilterRecord>,
}

pub async fn run(args: &FilterSaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::MANAGE_FILTERS)?;

    let draft = criteria::draft_from_args(&args.criteria);
    let normalized = draft.normalize();
    criteria::warn_dropped(&draft, &normalized);

    ctx.client
        .save_filter(&ctx.session, &args.name, &normalized)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    // Refresh the saved list, the same way the filter page re-fetches
    // after a save. Overwriting an existing name leaves a single entry.
    let name = args.name.trim().to_string();
    let record = match ctx.client.fetch_saved_filters(&ctx.session).await {
        Ok(mut filters) => filters.remove(&name),
        Err(error) => {
            tracing::warn!(%error, "saved, but refreshing the filter list failed");
            None
        }
    };

    output(
        &FilterSaveResponse {
            name,
            saved: true,
            criteria: normalized,
            record,
        },
        flags.format,
    )
}
