//! Local notification state.

use std::sync::{Mutex, PoisonError};

use case_core::entities::Notification;

/// Point-in-time copy of the store contents, newest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationSnapshot {
    pub items: Vec<Notification>,
    pub unread: usize,
    /// Error from the most recent failed poll or mark-read call.
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<Notification>,
    last_error: Option<String>,
}

/// Merged view of every notification poll.
///
/// Polls overlap and re-deliver: merging is by id, with the incoming copy
/// winning so server-side read flags propagate. Mark-read is optimistic:
/// the local flag flips immediately and stays flipped even if the server
/// call later fails; the failure is recorded, not rolled back.
#[derive(Debug, Default)]
pub struct NotificationStore {
    state: Mutex<StoreState>,
}

impl NotificationStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                items: Vec::new(),
                last_error: None,
            }),
        }
    }

    /// Merge a successful poll into the store and clear any recorded error.
    pub fn sync(&self, fetched: Vec<Notification>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        for incoming in fetched {
            match state.items.iter_mut().find(|n| n.id == incoming.id) {
                Some(existing) => *existing = incoming,
                None => state.items.push(incoming),
            }
        }
        state
            .items
            .sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        state.last_error = None;
    }

    /// Flip a notification to read locally. Returns false when the id is
    /// unknown.
    pub fn mark_read_local(&self, id: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match state.items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    /// Record a failed poll or mark-read call.
    pub fn record_error(&self, message: String) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.last_error = Some(message);
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn snapshot(&self) -> NotificationSnapshot {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        NotificationSnapshot {
            items: state.items.clone(),
            unread: state.items.iter().filter(|n| !n.read).count(),
            last_error: state.last_error.clone(),
        }
    }
}
