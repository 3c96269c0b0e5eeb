//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the directory ports, enabling
//! deterministic tests without network dependencies. The contact store
//! records call counts so tests can assert how many queries a code path
//! actually issued.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rolodex_core::directory::ports::{ContactStore, IdentityProvider, Notifier, RoleStore};
use rolodex_domain::{
    Contact, ContactPatch, NotifyKind, Result as DomainResult, Role, RolodexError,
};

/// In-memory mock for `ContactStore`.
///
/// Stores contacts in a `Mutex`-guarded vector and counts queries and
/// inserts. Query failures and an artificial query delay can be switched
/// on to exercise the read fallback and single-flight paths.
#[derive(Default)]
pub struct MockContactStore {
    contacts: Mutex<Vec<Contact>>,
    next_id: AtomicUsize,
    query_count: AtomicUsize,
    insert_count: AtomicUsize,
    fail_queries: AtomicBool,
    query_delay: Mutex<Option<Duration>>,
}

impl MockContactStore {
    /// Create a new mock seeded with the provided contacts.
    pub fn new(contacts: Vec<Contact>) -> Arc<Self> {
        Arc::new(Self { contacts: Mutex::new(contacts), ..Default::default() })
    }

    /// Number of `query_by_owner` calls issued so far.
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }

    /// Number of `insert` calls issued so far.
    pub fn insert_count(&self) -> usize {
        self.insert_count.load(Ordering::SeqCst)
    }

    /// Make every subsequent query fail with a store error.
    pub fn fail_queries(&self) {
        self.fail_queries.store(true, Ordering::SeqCst);
    }

    /// Delay every query, keeping concurrent readers in flight together.
    pub fn set_query_delay(&self, delay: Duration) {
        *self.query_delay.lock().unwrap() = Some(delay);
    }

    /// Snapshot of the stored contacts.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn insert(&self, contact: &Contact) -> DomainResult<String> {
        self.insert_count.fetch_add(1, Ordering::SeqCst);
        let id = format!("contact-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut stored = contact.clone();
        stored.id = Some(id.clone());
        self.contacts.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn query_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Contact>> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        let delay = *self.query_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(RolodexError::Store("query rejected".into()));
        }
        let mut list: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|contact| contact.owner_id == owner_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn patch(&self, id: &str, patch: &ContactPatch) -> DomainResult<()> {
        let mut contacts = self.contacts.lock().unwrap();
        let Some(contact) = contacts.iter_mut().find(|c| c.id.as_deref() == Some(id)) else {
            return Err(RolodexError::NotFound(format!("contact {id}")));
        };
        patch.apply(contact);
        Ok(())
    }

    async fn remove(&self, id: &str) -> DomainResult<()> {
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id.as_deref() != Some(id));
        if contacts.len() == before {
            return Err(RolodexError::NotFound(format!("contact {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `RoleStore`.
#[derive(Default)]
pub struct MockRoleStore {
    roles: Mutex<Vec<(String, Role)>>,
}

impl MockRoleStore {
    /// Create a new mock seeded with the provided role assignments.
    pub fn new(roles: Vec<(String, Role)>) -> Arc<Self> {
        Arc::new(Self { roles: Mutex::new(roles) })
    }

    /// Role currently stored for an owner, if any.
    pub fn stored_role(&self, owner_id: &str) -> Option<Role> {
        self.roles
            .lock()
            .unwrap()
            .iter()
            .find(|(owner, _)| owner == owner_id)
            .map(|(_, role)| *role)
    }
}

#[async_trait]
impl RoleStore for MockRoleStore {
    async fn get_role(&self, owner_id: &str) -> DomainResult<Role> {
        self.stored_role(owner_id)
            .ok_or_else(|| RolodexError::NotFound(format!("role for {owner_id}")))
    }

    async fn set_role(&self, owner_id: &str, role: Role) -> DomainResult<()> {
        let mut roles = self.roles.lock().unwrap();
        if let Some(entry) = roles.iter_mut().find(|(owner, _)| owner == owner_id) {
            entry.1 = role;
        } else {
            roles.push((owner_id.to_string(), role));
        }
        Ok(())
    }
}

/// Fixed identity provider for tests.
pub struct FixedIdentity {
    owner_id: Option<String>,
}

impl FixedIdentity {
    pub fn signed_in(owner_id: &str) -> Arc<Self> {
        Arc::new(Self { owner_id: Some(owner_id.to_string()) })
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self { owner_id: None })
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_owner_id(&self) -> Option<String> {
        self.owner_id.clone()
    }
}

/// Notifier that records every message it is handed.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotifyKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All recorded messages, in order.
    pub fn messages(&self) -> Vec<(NotifyKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Kinds of recorded messages, in order.
    pub fn kinds(&self) -> Vec<NotifyKind> {
        self.messages.lock().unwrap().iter().map(|(kind, _)| *kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        self.messages.lock().unwrap().push((kind, message.to_string()));
    }
}
