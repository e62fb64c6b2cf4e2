//! Cache Statistics Module
//!
//! Usage counters for a cache instance.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how a cache has been used.
///
/// `expired` counts entries removed after an operation observed them past
/// their deadline; each such lookup also counts as a miss. `entries` is the
/// number of entries physically present, which includes logically expired
/// entries that no lookup has evicted yet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing servable
    pub misses: u64,
    /// Entries removed after being observed past their deadline
    pub expired: u64,
    /// Entries physically present, including logically expired ones
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups that returned a live value.
    ///
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    /// Increments the hit counter.
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the expired-entry counter.
    pub(crate) fn record_expired(&mut self) {
        self.expired += 1;
    }

    /// Updates the physical entry count.
    pub(crate) fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
