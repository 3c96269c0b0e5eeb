//! # Rolodex Common
//!
//! Infrastructure-free utilities shared across the workspace:
//!
//! - `cache`: scope-keyed TTL cache with optional metrics
//! - `time`: clock abstraction for deterministic time-based testing

pub mod cache;
pub mod time;

pub use cache::{CacheConfig, CacheInfo, CacheStats, ScopedTtlCache};
pub use time::{Clock, MockClock, SystemClock};
