//! Contact directory service - core business logic

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use rolodex_common::{CacheConfig, CacheInfo, CacheStats, Clock, ScopedTtlCache, SystemClock};
use rolodex_domain::{
    Capability, CacheSettings, Contact, ContactDraft, ContactPatch, ContactStatistics, NotifyKind,
    Result, Role, RolodexError,
};
use tracing::{debug, info, warn};

use super::context::DirectoryContext;
use super::duplicates::check_duplicates;
use super::permissions::PermissionGate;
use super::ports::{ContactStore, Notifier, RoleStore};
use super::search::matches_query;

type ReadFlight = Shared<BoxFuture<'static, Vec<Contact>>>;

/// Contact directory orchestrator
///
/// Composes the scoped TTL cache, duplicate detection, and the permission
/// gate in front of the remote contact store. Reads prefer the cache and
/// coalesce concurrent cold fetches into a single store query; every
/// mutation invalidates the cache so the next read refetches.
pub struct ContactDirectory<C = SystemClock>
where
    C: Clock + Clone,
{
    store: Arc<dyn ContactStore>,
    roles: Arc<dyn RoleStore>,
    notifier: Arc<dyn Notifier>,
    cache: ScopedTtlCache<Vec<Contact>, C>,
    inflight: Arc<Mutex<Option<(String, ReadFlight)>>>,
    clock: C,
}

impl ContactDirectory<SystemClock> {
    /// Create a new directory backed by the system clock
    pub fn new(
        store: Arc<dyn ContactStore>,
        roles: Arc<dyn RoleStore>,
        notifier: Arc<dyn Notifier>,
        settings: &CacheSettings,
    ) -> Self {
        Self::with_clock(store, roles, notifier, settings, SystemClock)
    }
}

impl<C> ContactDirectory<C>
where
    C: Clock + Clone,
{
    /// Create a directory with a custom clock, used by tests to control
    /// TTL expiry and timestamps
    pub fn with_clock(
        store: Arc<dyn ContactStore>,
        roles: Arc<dyn RoleStore>,
        notifier: Arc<dyn Notifier>,
        settings: &CacheSettings,
        clock: C,
    ) -> Self {
        let config = CacheConfig::ttl(Duration::from_millis(settings.ttl_ms)).with_metrics();
        Self {
            store,
            roles,
            notifier,
            cache: ScopedTtlCache::with_clock(config, clock.clone()),
            inflight: Arc::new(Mutex::new(None)),
            clock,
        }
    }

    /// Return the caller's contact list, newest first.
    ///
    /// An anonymous caller gets an empty list. Cache misses fall through
    /// to the store; concurrent cold reads for the same owner share one
    /// underlying query. Store failures resolve to an empty list so the
    /// caller always has something renderable.
    pub async fn contacts(&self, ctx: &DirectoryContext) -> Vec<Contact> {
        let Some(owner_id) = ctx.owner_id.clone() else {
            return Vec::new();
        };

        if let Some(list) = self.cache.get(&owner_id) {
            debug!(owner_id = %owner_id, count = list.len(), "serving contacts from cache");
            return list;
        }

        let flight = {
            let mut guard = self.inflight.lock().unwrap();
            match guard.as_ref() {
                Some((owner, flight)) if *owner == owner_id => flight.clone(),
                _ => {
                    let flight = self.spawn_fetch(owner_id.clone());
                    *guard = Some((owner_id, flight.clone()));
                    flight
                }
            }
        };
        flight.await
    }

    fn spawn_fetch(&self, owner_id: String) -> ReadFlight {
        let store = Arc::clone(&self.store);
        let cache = self.cache.clone();
        let inflight = Arc::clone(&self.inflight);
        async move {
            let list = match store.query_by_owner(&owner_id).await {
                Ok(list) => {
                    cache.set(&owner_id, list.clone());
                    list
                }
                Err(err) => {
                    warn!(owner_id = %owner_id, error = %err, "contact fetch failed, serving empty list");
                    Vec::new()
                }
            };
            if let Ok(mut guard) = inflight.lock() {
                // The slot may already hold a different owner's flight.
                if guard.as_ref().is_some_and(|(owner, _)| *owner == owner_id) {
                    *guard = None;
                }
            }
            list
        }
        .boxed()
        .shared()
    }

    /// Return the caller's contacts matching a search query
    pub async fn search(&self, ctx: &DirectoryContext, query: &str) -> Vec<Contact> {
        self.contacts(ctx)
            .await
            .into_iter()
            .filter(|contact| matches_query(contact, query))
            .collect()
    }

    /// Aggregate counts over the caller's contact list
    pub async fn statistics(&self, ctx: &DirectoryContext) -> ContactStatistics {
        ContactStatistics::from_contacts(&self.contacts(ctx).await)
    }

    /// Create a new contact for the signed-in owner.
    ///
    /// Requires the create capability. The draft is validated and checked
    /// for duplicates against the current list before any store call, so a
    /// rejected create leaves no partial remote state.
    pub async fn create(&self, ctx: &DirectoryContext, draft: ContactDraft) -> Result<Contact> {
        let owner_id = self.require_owner(ctx)?;
        self.require(ctx, Capability::Create)?;
        draft.validate()?;

        let existing = self.contacts(ctx).await;
        let check = check_duplicates(&draft.email, &draft.phone, &existing, None);
        if let Some(message) = check.describe() {
            self.notifier.notify(NotifyKind::Warning, &message);
            return Err(RolodexError::Duplicate(message));
        }

        let mut contact = draft.into_contact(owner_id, self.clock.millis_since_epoch());
        let id = self.store.insert(&contact).await?;
        contact.id = Some(id);
        self.cache.invalidate();

        info!(owner_id = %contact.owner_id, id = ?contact.id, "contact created");
        self.notifier
            .notify(NotifyKind::Success, &format!("contact {} created", contact.display_name()));
        Ok(contact)
    }

    /// Apply a partial update to an existing contact.
    ///
    /// Requires the edit capability. Duplicates are not re-checked on
    /// edit; only creation enforces uniqueness. An empty patch is a no-op.
    pub async fn update(&self, ctx: &DirectoryContext, id: &str, patch: ContactPatch) -> Result<()> {
        self.require_owner(ctx)?;
        self.require(ctx, Capability::Edit)?;
        if patch.is_empty() {
            return Ok(());
        }

        let mut patch = patch;
        patch.updated_at = Some(self.clock.millis_since_epoch());
        self.store.patch(id, &patch).await?;
        self.cache.invalidate();

        info!(id = %id, "contact updated");
        self.notifier.notify(NotifyKind::Success, "contact updated");
        Ok(())
    }

    /// Delete a contact. Requires the delete capability.
    pub async fn delete(&self, ctx: &DirectoryContext, id: &str) -> Result<()> {
        self.require_owner(ctx)?;
        self.require(ctx, Capability::Delete)?;

        self.store.remove(id).await?;
        self.cache.invalidate();

        info!(id = %id, "contact deleted");
        self.notifier.notify(NotifyKind::Success, "contact deleted");
        Ok(())
    }

    /// Persist a new role for a target owner. Requires user management.
    pub async fn assign_role(
        &self,
        ctx: &DirectoryContext,
        target_owner_id: &str,
        role: Role,
    ) -> Result<()> {
        self.require_owner(ctx)?;
        self.require(ctx, Capability::ManageUsers)?;

        self.roles.set_role(target_owner_id, role).await?;
        info!(owner_id = %target_owner_id, role = %role, "role assigned");
        self.notifier
            .notify(NotifyKind::Success, &format!("role for {target_owner_id} set to {role}"));
        Ok(())
    }

    /// Drop the cached list, forcing the next read to hit the store
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    /// Reset all session-scoped state, called on sign-out
    pub fn end_session(&self) {
        self.cache.clear_all();
        if let Ok(mut guard) = self.inflight.lock() {
            *guard = None;
        }
        debug!("directory session state cleared");
    }

    /// Diagnostic view of the cache entry
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }

    /// Snapshot of cache hit/miss counters
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn require_owner(&self, ctx: &DirectoryContext) -> Result<String> {
        ctx.owner_id
            .clone()
            .ok_or_else(|| RolodexError::Auth("no signed-in user".into()))
    }

    fn require(&self, ctx: &DirectoryContext, capability: Capability) -> Result<()> {
        if PermissionGate::allows(ctx.role, capability) {
            return Ok(());
        }
        let message =
            format!("role '{}' is not allowed to {}", ctx.role, capability_verb(capability));
        self.notifier.notify(NotifyKind::Warning, &message);
        Err(RolodexError::PermissionDenied(message))
    }
}

fn capability_verb(capability: Capability) -> &'static str {
    match capability {
        Capability::Create => "create contacts",
        Capability::Edit => "edit contacts",
        Capability::Delete => "delete contacts",
        Capability::ViewAll => "view all contacts",
        Capability::ManageUsers => "manage users",
    }
}
