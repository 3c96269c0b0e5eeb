//! Domain types and models

pub mod contact;
pub mod notification;
pub mod role;
pub mod stats;
pub mod user;

// Re-export the frequently used types for convenience
pub use contact::{Contact, ContactCategory, ContactDraft, ContactPatch};
pub use notification::NotifyKind;
pub use role::{Capability, Role, RolePermissions};
pub use stats::ContactStatistics;
pub use user::UserProfile;
