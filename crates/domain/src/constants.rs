//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Cache configuration
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

// Contact field validation
pub const PHONE_DIGITS: usize = 9;
pub const MIN_NAME_LENGTH: usize = 2;
