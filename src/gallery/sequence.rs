use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Galleries whose last ticket is this far behind the newest are forgotten.
const PRUNE_DISTANCE: u64 = 4096;

/// Ticket handed out when a query is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

impl QueryTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Inner {
    next: u64,
    latest: HashMap<String, u64>,
}

/// Orders overlapping queries from the same gallery so only the most recently
/// issued one gets rendered.
#[derive(Debug, Clone, Default)]
pub struct QuerySequencer {
    inner: Arc<Mutex<Inner>>,
}

impl QuerySequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket for `gallery`, superseding any earlier one.
    pub fn issue(&self, gallery: &str) -> QueryTicket {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next += 1;
        let ticket = inner.next;
        inner.latest.insert(gallery.to_string(), ticket);

        if ticket % PRUNE_DISTANCE == 0 {
            inner
                .latest
                .retain(|_, last| ticket - *last < PRUNE_DISTANCE);
        }

        QueryTicket(ticket)
    }

    /// Whether `ticket` is still the newest issued for `gallery`.
    ///
    /// A gallery pruned while its query was in flight has had no newer
    /// ticket since (issuing one re-inserts it), so its result still counts.
    #[must_use]
    pub fn is_latest(&self, gallery: &str, ticket: QueryTicket) -> bool {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.latest.get(gallery).map_or(true, |&t| t == ticket.0)
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let seq = QuerySequencer::new();
        let a = seq.issue("g");
        let b = seq.issue("g");
        assert!(b > a);
    }

    #[test]
    fn test_newer_query_supersedes_older() {
        let seq = QuerySequencer::new();
        let first = seq.issue("g");
        let second = seq.issue("g");

        // Second finishes first and renders; first finishes later and is dropped.
        assert!(seq.is_latest("g", second));
        assert!(!seq.is_latest("g", first));
    }

    #[test]
    fn test_galleries_are_independent() {
        let seq = QuerySequencer::new();
        let a = seq.issue("a");
        let b = seq.issue("b");

        assert!(seq.is_latest("a", a));
        assert!(seq.is_latest("b", b));
    }

    #[test]
    fn test_slow_query_survives_pruning() {
        let seq = QuerySequencer::new();
        let slow = seq.issue("slow");
        for _ in 0..PRUNE_DISTANCE * 2 {
            seq.issue("busy");
        }

        assert_eq!(seq.tracked(), 1);
        assert!(seq.is_latest("slow", slow));

        // A newer search from the same gallery still supersedes it.
        let newer = seq.issue("slow");
        assert!(!seq.is_latest("slow", slow));
        assert!(seq.is_latest("slow", newer));
    }

    #[test]
    fn test_idle_galleries_are_pruned() {
        let seq = QuerySequencer::new();
        seq.issue("idle");
        for _ in 0..PRUNE_DISTANCE * 2 {
            seq.issue("busy");
        }
        assert_eq!(seq.tracked(), 1);
    }
}
