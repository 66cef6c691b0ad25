//! Monotonic request sequencing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing [`Ticket`]s across threads.
#[derive(Debug, Default)]
pub struct Sequencer {
    next: AtomicU64,
}

impl Sequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Issue the next ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The ticket most recently issued, if any.
    #[must_use]
    pub fn newest(&self) -> Option<Ticket> {
        match self.next.load(Ordering::Relaxed) {
            0 => None,
            n => Some(Ticket(n - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tickets_are_strictly_increasing() {
        let seq = Sequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        let c = seq.issue();
        assert!(a < b && b < c);
        assert_eq!(a.value(), 0);
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn newest_tracks_the_last_issued_ticket() {
        let seq = Sequencer::new();
        assert_eq!(seq.newest(), None);
        let a = seq.issue();
        assert_eq!(seq.newest(), Some(a));
        let b = seq.issue();
        assert_eq!(seq.newest(), Some(b));
    }

    #[test]
    fn issue_is_safe_across_threads() {
        let seq = std::sync::Arc::new(Sequencer::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let seq = std::sync::Arc::clone(&seq);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| seq.issue().value()).collect::<Vec<_>>()
            }));
        }
        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().expect("thread"))
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800, "every ticket must be unique");
    }
}
