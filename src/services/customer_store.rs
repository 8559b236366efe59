use crate::domain::customer::{Customer, CustomerId};
use crate::repository::cache_store::CacheStore;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

struct Inner {
    customers: Vec<Customer>,
    revision: u64,
}

/// Session-wide customer collection shared by the list and profile screens.
///
/// Every mutation writes the cache slot while still holding the lock, so the
/// in-memory collection and the persisted copy never differ by more than the
/// mutation in progress. Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct CustomerStore {
    inner: Arc<RwLock<Inner>>,
    cache: CacheStore,
}

impl PartialEq for CustomerStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl CustomerStore {
    /// Starts from whatever the cache holds, or empty.
    pub fn load(cache: CacheStore) -> Self {
        let customers = dedup_by_id(cache.load());
        Self {
            inner: Arc::new(RwLock::new(Inner { customers, revision: 0 })),
            cache,
        }
    }

    pub fn get(&self) -> Vec<Customer> {
        self.inner.read().customers.clone()
    }

    /// Runs `f` against the current collection without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&[Customer]) -> R) -> R {
        f(&self.inner.read().customers)
    }

    pub fn len(&self) -> usize {
        self.inner.read().customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().customers.is_empty()
    }

    pub fn find(&self, id: &CustomerId) -> Option<Customer> {
        self.inner.read().customers.iter().find(|c| &c.id == id).cloned()
    }

    /// Bumped on every applied mutation.
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    pub fn replace_all(&self, customers: Vec<Customer>) {
        let customers = dedup_by_id(customers);
        let mut inner = self.inner.write();
        inner.customers = customers;
        inner.revision += 1;
        self.cache.save(&inner.customers);
        debug!(count = inner.customers.len(), "Replaced customer collection");
    }

    /// Returns whether a record was removed.
    pub fn remove_by_id(&self, id: &CustomerId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.customers.len();
        inner.customers.retain(|c| &c.id != id);
        if inner.customers.len() == before {
            debug!(id = %id, "Delete for unknown customer ignored");
            return false;
        }
        inner.revision += 1;
        self.cache.save(&inner.customers);
        true
    }

    /// Replaces the record with identifier `id`. Unknown ids are ignored
    /// with a warning and reported as `false`.
    pub fn patch_by_id(&self, id: &CustomerId, customer: Customer) -> bool {
        let mut inner = self.inner.write();
        let Some(slot) = inner.customers.iter_mut().find(|c| &c.id == id) else {
            warn!(id = %id, "Patch for unknown customer ignored");
            return false;
        };
        *slot = customer;
        inner.revision += 1;
        self.cache.save(&inner.customers);
        true
    }
}

fn dedup_by_id(customers: Vec<Customer>) -> Vec<Customer> {
    let mut seen = HashSet::new();
    let before = customers.len();
    let unique: Vec<Customer> = customers.into_iter().filter(|c| seen.insert(c.id.clone())).collect();
    if unique.len() != before {
        warn!(dropped = before - unique.len(), "Dropped customers with duplicate ids");
    }
    unique
}
