//! Scope-keyed TTL cache
//!
//! A small cache holding the most recent value for a single scope (the
//! signed-in owner), with a fixed freshness window. It exists to absorb
//! repeated list-reads between mutations; the owning service invalidates it
//! after every write.
//!
//! # Features
//!
//! - **Thread-safe**: `Arc<RwLock<_>>`, clones share storage
//! - **Scope-aware**: a value stored for one scope is a miss for any other,
//!   regardless of freshness
//! - **TTL expiry**: values older than the configured window are dropped on
//!   access
//! - **Metrics tracking**: optional hit/miss/invalidation statistics
//! - **Testable**: clock abstraction for deterministic time-based testing
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use rolodex_common::cache::{CacheConfig, ScopedTtlCache};
//!
//! let cache: ScopedTtlCache<Vec<u32>> = ScopedTtlCache::new(CacheConfig::default());
//! cache.set("owner-1", vec![1, 2, 3]);
//! assert_eq!(cache.get("owner-1"), Some(vec![1, 2, 3]));
//! assert_eq!(cache.get("owner-2"), None);
//! ```

mod config;
mod core;
mod stats;

pub use config::CacheConfig;
pub use core::{CacheInfo, ScopedTtlCache};
pub use stats::CacheStats;
