//! Scope-keyed TTL cache implementation

use super::config::CacheConfig;
use super::stats::{CacheStats, MetricsCollector};
use crate::time::{Clock, SystemClock};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tracing::trace;

/// Snapshot of the cache's current state for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInfo {
    /// Whether a live entry is currently held
    pub has_entry: bool,

    /// Scope the entry was captured under, if any
    pub scope: Option<String>,

    /// How long ago the entry was captured
    pub age: Option<Duration>,

    /// Time remaining before the entry expires
    pub expires_in: Option<Duration>,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    scope: String,
    captured_at: Instant,
}

/// A single-slot cache keyed by a scope string with TTL-based expiration.
///
/// Holds at most one value at a time, captured under a scope (for example
/// an owner identifier). A read is a hit only when the requested scope
/// matches the stored one and the entry is younger than the configured TTL.
/// A read under a different scope evicts the stored entry, so stale data
/// never leaks across scopes.
///
/// Cloning the cache shares the underlying storage, so clones observe each
/// other's writes and invalidations.
pub struct ScopedTtlCache<V, C: Clock = SystemClock>
where
    V: Clone,
{
    entry: Arc<RwLock<Option<Entry<V>>>>,
    config: CacheConfig,
    metrics: MetricsCollector,
    clock: C,
}

impl<V: Clone> ScopedTtlCache<V, SystemClock> {
    /// Create a new cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<V, C> Clone for ScopedTtlCache<V, C>
where
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entry: Arc::clone(&self.entry),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<V, C> ScopedTtlCache<V, C>
where
    V: Clone,
    C: Clock,
{
    /// Create a cache with a custom clock, used by tests to control time
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            config,
            metrics: MetricsCollector::new(),
            clock,
        }
    }

    /// Get the cached value for a scope, if present and fresh.
    ///
    /// Returns a clone of the stored value. A request under a scope other
    /// than the stored one evicts the entry and counts as a miss, even when
    /// the entry has not yet expired.
    pub fn get(&self, scope: &str) -> Option<V> {
        let mut guard = self.entry.write().unwrap();

        let Some(entry) = guard.as_ref() else {
            self.record_miss();
            return None;
        };

        if entry.scope != scope {
            trace!(stored = %entry.scope, requested = %scope, "evicting entry for foreign scope");
            *guard = None;
            self.record_miss();
            return None;
        }

        if self.clock.now().duration_since(entry.captured_at) >= self.config.ttl {
            trace!(scope = %scope, "evicting expired entry");
            *guard = None;
            if self.config.track_metrics {
                self.metrics.record_expiration();
            }
            self.record_miss();
            return None;
        }

        let value = entry.value.clone();
        if self.config.track_metrics {
            self.metrics.record_hit();
        }
        Some(value)
    }

    /// Store a value under a scope, replacing any previous entry
    pub fn set(&self, scope: &str, value: V) {
        let entry = Entry {
            value,
            scope: scope.to_string(),
            captured_at: self.clock.now(),
        };
        *self.entry.write().unwrap() = Some(entry);
        if self.config.track_metrics {
            self.metrics.record_insert();
        }
    }

    /// Drop the stored entry regardless of scope or age
    pub fn invalidate(&self) {
        *self.entry.write().unwrap() = None;
        if self.config.track_metrics {
            self.metrics.record_invalidation();
        }
    }

    /// Drop the stored entry and reset all metrics, used at session end
    pub fn clear_all(&self) {
        *self.entry.write().unwrap() = None;
        self.metrics.reset();
    }

    /// Inspect the cache state without affecting hit/miss counters
    pub fn info(&self) -> CacheInfo {
        let guard = self.entry.read().unwrap();
        match guard.as_ref() {
            Some(entry) => {
                let age = self.clock.now().duration_since(entry.captured_at);
                CacheInfo {
                    has_entry: true,
                    scope: Some(entry.scope.clone()),
                    age: Some(age),
                    expires_in: Some(self.config.ttl.saturating_sub(age)),
                }
            }
            None => CacheInfo {
                has_entry: false,
                scope: None,
                age: None,
                expires_in: None,
            },
        }
    }

    /// Get a snapshot of current cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot()
    }

    fn record_miss(&self) {
        if self.config.track_metrics {
            self.metrics.record_miss();
        }
    }
}
