/*!
 * Stale-search guard.
 *
 * A new search can be started while a previous one is still in flight;
 * nothing cancels the older request. Instead every invocation takes a
 * ticket from a shared sequence, and a completion is only applied if its
 * ticket is still the newest. A late completion from a superseded search
 * must be discarded, never allowed to overwrite newer results.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Monotonic sequence of search invocations
#[derive(Debug, Default)]
pub struct SearchSequence {
    current: AtomicU64,
}

impl SearchSequence {
    /// Create a new sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new invocation, superseding all earlier tickets
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the given ticket is still the newest invocation
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}
