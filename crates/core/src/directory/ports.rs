//! Port interfaces for the contact directory
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for contact storage, role
//! persistence, identity resolution, and UI-facing notifications.

use async_trait::async_trait;
use rolodex_domain::{Contact, ContactPatch, NotifyKind, Result, Role};

/// Trait for contact persistence and retrieval
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a new contact and return the store-assigned identifier
    async fn insert(&self, contact: &Contact) -> Result<String>;

    /// Fetch all contacts for an owner, newest first
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Contact>>;

    /// Apply a partial update to an existing contact
    async fn patch(&self, id: &str, patch: &ContactPatch) -> Result<()>;

    /// Delete a contact by identifier
    async fn remove(&self, id: &str) -> Result<()>;
}

/// Trait for reading and writing the persisted role of an owner
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Get the stored role for an owner
    async fn get_role(&self, owner_id: &str) -> Result<Role>;

    /// Persist a new role for an owner
    async fn set_role(&self, owner_id: &str, role: Role) -> Result<()>;
}

/// Trait for resolving the currently signed-in owner
pub trait IdentityProvider: Send + Sync {
    /// Identifier of the signed-in owner, if any
    fn current_owner_id(&self) -> Option<String>;
}

/// UI-facing sink for operation outcomes
///
/// Presentation is out of scope here; implementations decide how a
/// message surfaces.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str);
}
