//! Path resolution cache
//!
//! The route table is immutable once built, so a resolved path can be reused
//! until the table is replaced. Entries are evicted least-recently-used.

use crate::matcher::PatternMatch;
use crate::table::{RouteMatch, RouteTable};
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Hit/miss counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub invalidations: usize,
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

#[derive(Debug, Clone)]
struct CachedResolution {
    index: usize,
    found: PatternMatch,
}

/// LRU cache of route-relevant path to matched route
#[derive(Debug)]
pub struct ResolveCache {
    entries: LruCache<String, CachedResolution>,
    stats: CacheStats,
}

impl ResolveCache {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A capacity of 0 is treated as 1
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Resolve through the cache
    pub fn resolve(&mut self, table: &RouteTable, path: &str) -> RouteMatch {
        let path = crate::location::route_path(path);

        if let Some(cached) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Resolve cache hit for '{}'", path);
            return table.to_match(cached.index, cached.found.clone());
        }

        self.stats.misses += 1;
        trace_log!("Resolve cache miss for '{}'", path);

        let resolved = table.resolve(path);
        self.entries.put(
            path.to_string(),
            CachedResolution {
                index: resolved.index,
                found: PatternMatch {
                    params: resolved.params.clone(),
                    remainder: resolved.remainder.clone(),
                },
            },
        );
        resolved
    }

    pub fn clear(&mut self) {
        trace_log!("Clearing resolve cache");
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}
