use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic ticket counter guarding list fetches.
///
/// Each fetch takes a ticket before it is sent; a response is applied only
/// if its ticket is still the latest one issued, so a slow earlier response
/// can not overwrite a newer page.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_ticket_is_current() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let ticket = seq.issue();
        assert!(other.is_latest(ticket));
        other.issue();
        assert!(!seq.is_latest(ticket));
    }
}
