use serde::Serialize;

use case_api::notifications::NotificationQuery;
use case_core::entities::Notification;
use case_store::NotificationStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NotificationListResponse {
    notifications: Vec<Notification>,
    unread: usize,
    count: usize,
}

pub async fn run(
    query: &NotificationQuery,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fetched = ctx
        .client
        .fetch_notifications(&ctx.session, query)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    // The store orders newest-first and counts unread.
    let store = NotificationStore::new();
    store.sync(fetched);
    let snapshot = store.snapshot();

    output(
        &NotificationListResponse {
            count: snapshot.items.len(),
            unread: snapshot.unread,
            notifications: snapshot.items,
        },
        flags.format,
    )
}
