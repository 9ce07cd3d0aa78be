//! Score cache for memoized search
//!
//! Maps a state's canonical key to its exact negamax score. Entries are
//! never overwritten: the first score stored for a key is kept for the
//! lifetime of the cache.
//!
//! # Example
//!
//! ```
//! use tippy::search::ScoreCache;
//!
//! let mut cache = ScoreCache::new();
//! assert!(cache.insert_if_absent("start", 1));
//! assert!(!cache.insert_if_absent("start", -1));
//! assert_eq!(cache.probe(&"start"), Some(1));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

/// Exclusive, unbounded state-to-score map owned by one strategy.
#[derive(Debug, Clone)]
pub struct ScoreCache<K> {
    entries: HashMap<K, i32>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash> ScoreCache<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a score without touching the statistics
    #[must_use]
    pub fn get(&self, key: &K) -> Option<i32> {
        self.entries.get(key).copied()
    }

    /// Look up a score, counting the hit or miss
    pub fn probe(&mut self, key: &K) -> Option<i32> {
        let found = self.get(key);
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Store `score` unless the key already has one.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert_if_absent(&mut self, key: K, score: i32) -> bool {
        use std::collections::hash_map::Entry;
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(score);
                trace!(score, entries = self.entries.len(), "cached score");
                true
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<K: Eq + Hash> Default for ScoreCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of stored scores
    pub entries: usize,
    /// Probes answered from the cache
    pub hits: u64,
    /// Probes that had to compute
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        let probes = self.hits + self.misses;
        if probes == 0 {
            0.0
        } else {
            self.hits as f64 / probes as f64 * 100.0
        }
    }
}
