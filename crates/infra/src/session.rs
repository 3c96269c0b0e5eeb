//! Session-scoped identity

use std::sync::RwLock;

use rolodex_core::IdentityProvider;

/// Identity provider holding the signed-in owner for this process.
///
/// The signed-in owner changes on sign-in and sign-out; directory calls
/// resolve their context from it at call time.
#[derive(Debug, Default)]
pub struct SessionIdentity {
    owner_id: RwLock<Option<String>>,
}

impl SessionIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sign-in for `owner_id`.
    pub fn sign_in(&self, owner_id: impl Into<String>) {
        if let Ok(mut guard) = self.owner_id.write() {
            *guard = Some(owner_id.into());
        }
    }

    /// Clear the signed-in owner.
    pub fn sign_out(&self) {
        if let Ok(mut guard) = self.owner_id.write() {
            *guard = None;
        }
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_owner_id(&self) -> Option<String> {
        self.owner_id.read().ok().and_then(|guard| guard.clone())
    }
}
