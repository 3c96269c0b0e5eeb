//! # Rolodex Domain
//!
//! Business domain types and models for the Rolodex contact directory.
//!
//! This crate contains:
//! - Domain data types (Contact, Role, UserProfile, ...)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and pure helpers
//!
//! ## Architecture
//! - No dependencies on other Rolodex crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export phone helpers
pub use utils::phone::{format_phone, is_valid_phone};
