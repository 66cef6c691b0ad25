use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MarkReadResponse {
    id: String,
    read: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.client
        .mark_notification_read(&ctx.session, id)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    output(
        &MarkReadResponse {
            id: id.to_string(),
            read: true,
        },
        flags.format,
    )
}
