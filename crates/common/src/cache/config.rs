//! Cache configuration

use std::time::Duration;

/// Default freshness window (30 seconds)
pub const DEFAULT_TTL: Duration = Duration::from_millis(30_000);

/// Configuration for cache behavior
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for the cached value
    pub ttl: Duration,

    /// Whether to collect access metrics
    pub track_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL, track_metrics: false }
    }
}

impl CacheConfig {
    /// Cache with a custom freshness window
    pub fn ttl(duration: Duration) -> Self {
        Self { ttl: duration, track_metrics: false }
    }

    /// Enable metrics collection
    pub fn with_metrics(mut self) -> Self {
        self.track_metrics = true;
        self
    }
}
