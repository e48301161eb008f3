// In-memory TTL cache store.
// Entries expire at an absolute deadline and are evicted lazily on read.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// A cached value with its expiry deadline.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    /// An entry is fresh up to and including its deadline.
    fn is_fresh(&self, now: Instant) -> bool {
        now <= self.expires_at
    }
}

/// Process-local key/value store with per-entry TTL.
///
/// There is no capacity bound and no background sweep; an expired entry
/// lingers until the next `get` for its key (or `delete`/`clear`).
/// Concurrent access is safe, but nothing coordinates two callers that
/// miss the same key at the same time.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any existing entry for the key.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key.into(), entry);
    }

    /// Get a fresh value. Removes the entry if it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if entry.is_fresh(Instant::now()) {
            return Some(entry.value.clone());
        }

        // release the shard read lock before removing
        drop(entry);
        self.entries
            .remove_if(key, |_, entry| !entry.is_fresh(Instant::now()));
        None
    }

    /// Check for a fresh value without cloning it.
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(Instant::now()))
    }

    /// Remove an entry regardless of freshness. Returns whether one existed.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
