//! Cache Store Module
//!
//! The concurrent cache engine: a keyed map of TTL entries behind a single
//! reader-writer lock.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats};

// == Concurrent Cache ==
/// Thread-safe key-value cache with per-entry TTL expiration.
///
/// All state sits behind one `RwLock`, and each operation holds the lock for
/// a single map access, so contention causes brief queuing rather than
/// starvation. Expiration is enforced lazily at read time: the first lookup
/// that observes an entry past its deadline removes it. Nothing sweeps the
/// map in the background, so an expired entry that is never looked up again
/// stays resident.
///
/// The cache owns its entries; lookups hand back clones of the stored value.
/// Share an instance across threads by wrapping it in an `Arc`; every
/// operation takes `&self`.
#[derive(Debug)]
pub struct ConcurrentCache<V> {
    inner: RwLock<Inner<V>>,
}

/// Map and counters guarded together, so a stats update is atomic with the
/// operation that caused it.
#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

impl<V: Clone> ConcurrentCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` after the current instant.
    ///
    /// Fully replaces any previous entry for the key, deadline included; two
    /// sets on the same key never merge. A zero `ttl` is legal and stores an
    /// entry that is stale for any strictly later lookup. Cannot fail.
    ///
    /// # Arguments
    /// * `key` - The key to store under; any string, including empty
    /// * `value` - The value to store
    /// * `ttl` - How long the entry stays servable
    pub fn set(&self, key: String, value: V, ttl: Duration) {
        let mut inner = self.write();
        trace!(%key, ttl_ms = ttl.as_millis() as u64, "entry stored");
        inner.entries.insert(key, CacheEntry::new(value, ttl));
        let count = inner.entries.len();
        inner.stats.set_entries(count);
    }

    // == Get ==
    /// Returns the live value stored under `key`, if any.
    ///
    /// A lookup that observes an entry strictly past its deadline removes it
    /// as a side effect and reports `None`; an observation at exactly the
    /// deadline still serves the value. The check-expire-delete sequence runs
    /// under the write half of the lock: a lookup may mutate the map, so
    /// taking it in shared mode would let a concurrent operation observe the
    /// entry mid-decision.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.write();

        if let Some(entry) = inner.entries.get(key) {
            if entry.is_expired() {
                debug!(key, "expired entry evicted on lookup");
                inner.entries.remove(key);
                let count = inner.entries.len();
                inner.stats.set_entries(count);
                inner.stats.record_expired();
                inner.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            inner.stats.record_hit();
            Some(value)
        } else {
            inner.stats.record_miss();
            None
        }
    }

    // == Remove ==
    /// Removes the entry under `key`, returning its value if it was still
    /// live.
    ///
    /// Removing an entry already past its deadline yields `None` and counts
    /// as an expiration; stale data is never handed out by any path.
    pub fn remove(&self, key: &str) -> Option<V> {
        let mut inner = self.write();
        let removed = inner.entries.remove(key);
        let count = inner.entries.len();
        inner.stats.set_entries(count);

        match removed {
            Some(entry) if entry.is_expired() => {
                inner.stats.record_expired();
                None
            }
            Some(entry) => Some(entry.value),
            None => None,
        }
    }

    // == Length ==
    /// Returns the number of entries physically present.
    ///
    /// The map is a superset of live keys: logically expired entries are
    /// counted until a lookup evicts them. Whether a key holds live data is
    /// answered only by [`get`](Self::get).
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are physically present.
    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.read();
        let mut stats = inner.stats.clone();
        stats.set_entries(inner.entries.len());
        stats
    }

    // == Lock Helpers ==
    /// Acquires the write half of the lock.
    ///
    /// Poisoning is recovered rather than propagated: every mutation is a
    /// single `HashMap` call, so a holder that panicked cannot have left the
    /// map torn, and the operations stay infallible.
    fn write(&self) -> RwLockWriteGuard<'_, Inner<V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the read half of the lock, recovering poisoning the same way.
    fn read(&self) -> RwLockReadGuard<'_, Inner<V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Default for ConcurrentCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
