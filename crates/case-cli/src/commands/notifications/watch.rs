//! Continuous notification polling.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use case_api::notifications::NotificationQuery;
use case_core::entities::Notification;
use case_store::{NotificationSnapshot, NotificationStore, Sequencer, Ticket};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WatchTickResponse {
    polled_at: DateTime<Utc>,
    unread: usize,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    notifications: Vec<Notification>,
}

/// Poll the notification feed until interrupted.
///
/// Each tick spawns a fetch; responses are merged through the store, and
/// a response that is not from the newest issued poll is discarded so a
/// slow fetch can never overwrite fresher state. A tick is printed only
/// when the merged state actually changed.
pub async fn run(
    query: NotificationQuery,
    interval_secs: u64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = NotificationStore::new();
    let seq = Sequencer::new();
    let (tx, mut rx) = mpsc::channel::<(Ticket, Result<Vec<Notification>, String>)>(4);

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_signature: Option<Signature> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let ticket = seq.issue();
                let client = ctx.client.clone();
                let session = ctx.session.clone();
                let query = query.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .fetch_notifications(&session, &query)
                        .await
                        .map_err(|error| error.user_message());
                    let _ = tx.send((ticket, result)).await;
                });
            }
            Some((ticket, result)) = rx.recv() => {
                if seq.newest() != Some(ticket) {
                    tracing::debug!(ticket = ticket.value(), "discarding stale notification poll");
                    continue;
                }
                match result {
                    Ok(items) => store.sync(items),
                    Err(message) => store.record_error(message),
                }

                let snapshot = store.snapshot();
                let current = signature(&snapshot);
                if last_signature.as_ref() != Some(&current) {
                    last_signature = Some(current);
                    render_tick(snapshot, flags)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch interrupted");
                return Ok(());
            }
        }
    }
}

type Signature = (usize, Option<String>, Vec<(String, bool)>);

/// What a printed tick depends on; `polled_at` alone never triggers one.
fn signature(snapshot: &NotificationSnapshot) -> Signature {
    (
        snapshot.unread,
        snapshot.last_error.clone(),
        snapshot
            .items
            .iter()
            .map(|n| (n.id.clone(), n.read))
            .collect(),
    )
}

fn render_tick(snapshot: NotificationSnapshot, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &WatchTickResponse {
            polled_at: Utc::now(),
            unread: snapshot.unread,
            count: snapshot.items.len(),
            error: snapshot.last_error,
            notifications: snapshot.items,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use case_core::entities::Notification;
    use case_core::enums::NotificationKind;
    use case_store::NotificationStore;

    use super::signature;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::CaseUpdate,
            title: "t".to_string(),
            body: "b".to_string(),
            case_id: None,
            read,
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn signature_is_stable_for_identical_state() {
        let store = NotificationStore::new();
        store.sync(vec![notification("a", false)]);
        let first = signature(&store.snapshot());

        store.sync(vec![notification("a", false)]);
        let second = signature(&store.snapshot());
        assert_eq!(first, second);
    }

    #[test]
    fn signature_changes_when_read_state_flips() {
        let store = NotificationStore::new();
        store.sync(vec![notification("a", false)]);
        let before = signature(&store.snapshot());

        store.sync(vec![notification("a", true)]);
        let after = signature(&store.snapshot());
        assert_ne!(before, after);
    }

    #[test]
    fn signature_changes_when_an_error_is_recorded() {
        let store = NotificationStore::new();
        store.sync(vec![notification("a", false)]);
        let before = signature(&store.snapshot());

        store.record_error("poll failed".to_string());
        let after = signature(&store.snapshot());
        assert_ne!(before, after);
    }
}
