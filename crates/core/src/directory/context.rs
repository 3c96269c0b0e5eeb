//! Per-call directory context
//!
//! Owner and role are passed explicitly into each directory call rather
//! than held as mutable instance state, so identity swaps cannot race a
//! call that is already in flight.

use std::sync::Arc;

use rolodex_domain::Role;

use super::ports::{IdentityProvider, RoleStore};

/// Identity and role under which a directory call runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryContext {
    /// Signed-in owner, if any
    pub owner_id: Option<String>,
    /// Role resolved at sign-in; `Visitor` when unresolved
    pub role: Role,
}

impl DirectoryContext {
    /// Context for a signed-in owner with a known role
    pub fn signed_in(owner_id: impl Into<String>, role: Role) -> Self {
        Self { owner_id: Some(owner_id.into()), role }
    }

    /// Context for an anonymous caller
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve a context from the identity provider and role store.
    ///
    /// A missing owner or a failed role lookup both resolve to `Visitor`.
    pub async fn resolve(
        identity: &Arc<dyn IdentityProvider>,
        roles: &Arc<dyn RoleStore>,
    ) -> Self {
        let Some(owner_id) = identity.current_owner_id() else {
            return Self::anonymous();
        };
        let role = roles.get_role(&owner_id).await.unwrap_or_default();
        Self { owner_id: Some(owner_id), role }
    }
}
