//! Bounded LRU result cache, keyed on a canonical serialization of request
//! options and evicted purely by access recency. No network tier: the core
//! performs no I/O, so there is nothing to fall back to on a miss besides
//! regenerating.

use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A single-tier, thread-safe LRU cache over arbitrary cloneable values.
///
/// Lookups and inserts both take the same exclusive lock: a lookup still
/// needs to mutate the LRU's recency order, so there is no cheaper shared-lock
/// path worth adding at this cache's expected size (a handful of distinct
/// option sets per process).
pub struct ResultCache<V: Clone> {
    entries: RwLock<lru::LruCache<String, V>>,
    stats: Arc<RwLock<CacheStats>>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity.max(1) is nonzero");
        Self {
            entries: RwLock::new(lru::LruCache::new(capacity)),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.write();
        let hit = entries.get(key).cloned();
        let mut stats = self.stats.write();
        if hit.is_some() {
            stats.hits += 1;
        } else {
            stats.misses += 1;
        }
        hit
    }

    /// Insert `value` under `key`, evicting the least-recently-used entry if
    /// the cache was already at capacity.
    pub fn put(&self, key: String, value: V) {
        let mut entries = self.entries.write();
        let was_full = entries.len() == entries.cap().get();
        let evicted = entries.put(key, value);
        if was_full && evicted.is_none() {
            log::trace!("result cache at capacity {}, evicting LRU entry", entries.cap());
            self.stats.write().evictions += 1;
        }
    }

    pub fn stats(&self) -> CacheStats {
        *self.stats.read()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
