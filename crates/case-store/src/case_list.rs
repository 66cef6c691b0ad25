//! The visible case list, with stale-apply discard.

use std::sync::{Mutex, PoisonError};

use case_core::entities::CaseRow;

use crate::seq::{Sequencer, Ticket};

/// What happened to a completed apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The completion carried the newest ticket and was committed.
    Applied,
    /// A newer apply started after this one; the completion was dropped.
    DiscardedStale,
}

/// Point-in-time copy of the store contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSnapshot {
    pub rows: Vec<CaseRow>,
    /// Total matches across all pages for the committed filter.
    pub total: u64,
    /// Error from the most recent failed apply, if the data shown is stale.
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct ListState {
    rows: Vec<CaseRow>,
    total: u64,
    last_error: Option<String>,
}

/// Holds the case rows currently "on screen".
///
/// Every apply takes a ticket first; only the completion holding the
/// newest ticket commits. A failed apply keeps the previous rows visible
/// and records the error instead.
#[derive(Debug, Default)]
pub struct CaseListStore {
    seq: Sequencer,
    state: Mutex<ListState>,
}

impl CaseListStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seq: Sequencer::new(),
            state: Mutex::new(ListState {
                rows: Vec::new(),
                total: 0,
                last_error: None,
            }),
        }
    }

    /// Register a new apply. Issuing the ticket is what makes any
    /// still-in-flight apply stale.
    pub fn begin_apply(&self) -> Ticket {
        self.seq.issue()
    }

    /// Commit or discard a finished apply.
    pub fn complete_apply(
        &self,
        ticket: Ticket,
        result: Result<(Vec<CaseRow>, u64), String>,
    ) -> ApplyOutcome {
        if self.seq.newest() != Some(ticket) {
            tracing::debug!(ticket = ticket.value(), "discarding stale apply");
            return ApplyOutcome::DiscardedStale;
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok((rows, total)) => {
                state.rows = rows;
                state.total = total;
                state.last_error = None;
            }
            Err(message) => {
                // Keep the previous rows; the view shows stale data plus
                // the error rather than going blank.
                state.last_error = Some(message);
            }
        }
        ApplyOutcome::Applied
    }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        ListSnapshot {
            rows: state.rows.clone(),
            total: state.total,
            last_error: state.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use case_core::enums::CaseStatus;

    fn row(case_id: &str) -> CaseRow {
        CaseRow {
            case_id: case_id.to_string(),
            client_name: "Maria Lopez".to_string(),
            client_email: None,
            client_phone: None,
            status: CaseStatus::Submitted,
            ai_score: Some(80),
            estimated_claim_amount: None,
            recent_activity: None,
            products: None,
            call_summary: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn successful_apply_replaces_rows_and_clears_error() {
        let store = CaseListStore::new();
        let t0 = store.begin_apply();
        store.complete_apply(t0, Err("backend down".to_string()));
        assert_eq!(store.snapshot().last_error.as_deref(), Some("backend down"));

        let t1 = store.begin_apply();
        let outcome = store.complete_apply(t1, Ok((vec![row("case_001")], 1)));
        assert_eq!(outcome, ApplyOutcome::Applied);

        let snap = store.snapshot();
        assert_eq!(snap.rows.len(), 1);
        assert_eq!(snap.total, 1);
        assert_eq!(snap.last_error, None);
    }

    #[test]
    fn failed_apply_keeps_previous_rows() {
        let store = CaseListStore::new();
        let t0 = store.begin_apply();
        store.complete_apply(t0, Ok((vec![row("case_001"), row("case_002")], 2)));

        let t1 = store.begin_apply();
        let outcome = store.complete_apply(t1, Err("timeout".to_string()));
        assert_eq!(outcome, ApplyOutcome::Applied);

        let snap = store.snapshot();
        assert_eq!(snap.rows.len(), 2, "previous rows must survive a failure");
        assert_eq!(snap.total, 2);
        assert_eq!(snap.last_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let store = CaseListStore::new();
        let old = store.begin_apply();
        let new = store.begin_apply();

        // The slow old response lands after a newer apply began.
        let outcome = store.complete_apply(old, Ok((vec![row("stale")], 1)));
        assert_eq!(outcome, ApplyOutcome::DiscardedStale);
        assert!(store.snapshot().rows.is_empty());

        let outcome = store.complete_apply(new, Ok((vec![row("fresh")], 1)));
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(store.snapshot().rows[0].case_id, "fresh");
    }

    #[test]
    fn stale_failure_does_not_record_an_error() {
        let store = CaseListStore::new();
        let old = store.begin_apply();
        let _new = store.begin_apply();

        let outcome = store.complete_apply(old, Err("old request died".to_string()));
        assert_eq!(outcome, ApplyOutcome::DiscardedStale);
        assert_eq!(store.snapshot().last_error, None);
    }
}
