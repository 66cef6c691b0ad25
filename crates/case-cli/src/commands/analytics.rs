use std::str::FromStr;

use case_core::enums::TimeRange;
use case_core::permissions::Permissions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyticsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `csd analytics`.
pub async fn handle(
    args: &AnalyticsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_permission(Permissions::VIEW_ANALYTICS)?;

    let time_range = match args.time_range.as_deref() {
        Some(raw) => TimeRange::from_str(raw).map_err(|_| {
            anyhow::anyhow!("invalid --time-range '{raw}': expected 7d, 30d, 90d, or all")
        })?,
        None => ctx.config.general.default_time_range,
    };

    let analytics = ctx
        .client
        .fetch_analytics(&ctx.session, time_range)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    output(&analytics, flags.format)
}
