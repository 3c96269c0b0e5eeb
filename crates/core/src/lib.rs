//! # Rolodex Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The contact directory orchestrator
//! - Duplicate detection and permission rules
//!
//! ## Architecture Principles
//! - Only depends on `rolodex-common` and `rolodex-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod directory;

// Re-export specific items to avoid ambiguity
pub use directory::context::DirectoryContext;
pub use directory::duplicates::{check_duplicates, DuplicateCheck};
pub use directory::permissions::PermissionGate;
pub use directory::ports::{ContactStore, IdentityProvider, Notifier, RoleStore};
pub use directory::search::matches_query;
pub use directory::ContactDirectory;
