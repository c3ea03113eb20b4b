//! Epoch-based query cache for the sweet list.
//!
//! DESIGN
//! ======
//! Mutations never touch `items` directly. A successful mutation bumps the
//! invalidation epoch; a single fetch effect observes `needs_fetch()` and
//! re-fetches, so rendered lists are always the backend's last fetched
//! snapshot. This keeps the mutation side and the read side coupled through
//! one explicit contract instead of scattered refresh calls.

#[cfg(test)]
#[path = "sweets_test.rs"]
mod sweets_test;

use crate::net::types::Sweet;

/// Cached sweet list plus fetch bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweetsCache {
    /// Last successfully fetched snapshot. The only list views may render.
    pub items: Vec<Sweet>,
    /// True while a fetch for the current epoch is in flight.
    pub loading: bool,
    /// Detail of the last failed fetch, shown in place of the grid.
    pub error: Option<String>,
    epoch: u64,
    fetched_epoch: Option<u64>,
}

impl SweetsCache {
    /// Mark the cached snapshot stale. The next `needs_fetch()` observer run
    /// triggers a re-fetch. Called exactly once per successful mutation.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.error = None;
    }

    /// Whether the observer should fetch now: the current epoch has no
    /// snapshot, no fetch is in flight, and the last fetch did not fail.
    /// A failed fetch stays failed until user action invalidates again —
    /// never an automatic retry.
    pub fn needs_fetch(&self) -> bool {
        !self.loading && self.error.is_none() && self.fetched_epoch != Some(self.epoch)
    }

    /// Record that a fetch for the current epoch started.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.epoch
    }

    /// Adopt a fetched snapshot for `epoch`. A snapshot from a fetch that was
    /// invalidated mid-flight is stored but stays stale, so the observer
    /// immediately fetches again rather than serving outdated items as fresh.
    pub fn store(&mut self, epoch: u64, items: Vec<Sweet>) {
        self.items = items;
        self.fetched_epoch = Some(epoch);
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. The stale snapshot is kept; no automatic retry.
    pub fn fail(&mut self, detail: String) {
        self.loading = false;
        self.error = Some(detail);
    }
}
