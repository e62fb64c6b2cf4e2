//! TTL Cache - A thread-safe in-memory key-value cache
//!
//! Stores opaque values under string keys with a per-entry time-to-live.
//! Lookups return a value only while its TTL has not elapsed; expired
//! entries are evicted lazily, by the first lookup that observes them past
//! their deadline.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use ttl_cache::ConcurrentCache;
//!
//! let cache = ConcurrentCache::new();
//! cache.set("session".to_string(), "token-1".to_string(), Duration::from_secs(5));
//! assert_eq!(cache.get("session"), Some("token-1".to_string()));
//! assert_eq!(cache.get("unknown"), None);
//! ```
//!
//! Share an instance across threads by wrapping it in an [`std::sync::Arc`];
//! every operation takes `&self`.

pub mod cache;

pub use cache::{CacheEntry, CacheStats, ConcurrentCache};
