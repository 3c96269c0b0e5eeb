//! Contact directory
//!
//! The directory composes the scoped TTL cache, duplicate detection, and
//! the permission gate in front of the remote contact store. All mutations
//! go through it so the cache can be invalidated on every write.

pub mod context;
pub mod duplicates;
pub mod permissions;
pub mod ports;
pub mod search;
pub mod service;

pub use service::ContactDirectory;
