use crate::domain::customer::Customer;
use crate::repository::storage::StorageBackend;
use crate::services::error_handling::{CustomerError, ErrorContext, LogHelper};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// The persisted copy of the customer collection: one slot, one JSON array.
#[derive(Clone)]
pub struct CacheStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl CacheStore {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Previously saved collection, or empty when the slot is absent,
    /// unreadable or does not hold a customer array.
    pub fn load(&self) -> Vec<Customer> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No cached customers");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cache slot unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Customer>>(&raw) {
            Ok(customers) => {
                debug!(key = %self.key, count = customers.len(), "Loaded cached customers");
                customers
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cached customers malformed, treating as absent");
                Vec::new()
            }
        }
    }

    pub fn try_save(&self, customers: &[Customer]) -> Result<()> {
        let written = serde_json::to_string(customers)
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                self.backend.set_item(&self.key, &json).map_err(|e| {
                    CustomerError::Storage {
                        key: self.key.clone(),
                        message: e.to_string(),
                    }
                    .into()
                })
            });

        ErrorContext::new("persist customers")
            .with_detail("key", &self.key)
            .with_detail("count", customers.len())
            .wrap(written)
    }

    /// Best effort: a failed write is logged and the in-memory state stays
    /// authoritative for the session.
    pub fn save(&self, customers: &[Customer]) {
        if let Err(e) = self.try_save(customers) {
            LogHelper::log_swallowed("persist customers", &e);
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove_item(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::storage::MemoryStorage;

    fn store(backend: Arc<dyn StorageBackend>) -> CacheStore {
        CacheStore::new(backend, "customers")
    }

    #[test]
    fn test_load_empty_slot() {
        let cache = store(Arc::new(MemoryStorage::new()));
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let backend = Arc::new(MemoryStorage::new());
        let cache = store(backend.clone());
        let customers = vec![Customer::new(1u64, "Ada", "Lovelace"), Customer::new(2u64, "Alan", "Turing")];

        cache.save(&customers);

        // a new handle over the same backend sees the data, like a reload
        assert_eq!(store(backend).load(), customers);
    }

    #[test]
    fn test_malformed_slot_is_absent() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set_item("customers", "{not json").unwrap();
        assert!(store(backend.clone()).load().is_empty());

        backend.set_item("customers", r#"{"data": []}"#).unwrap();
        assert!(store(backend).load().is_empty());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let cache = store(Arc::new(MemoryStorage::rejecting_writes()));
        let customers = vec![Customer::new(1u64, "Ada", "Lovelace")];

        cache.save(&customers);
        let err = cache.try_save(&customers).unwrap_err();
        assert_eq!(err.to_string(), "persist customers failed (key=customers, count=1)");
        let cause = err.chain().find_map(|e| e.downcast_ref::<CustomerError>());
        assert!(matches!(cause, Some(CustomerError::Storage { key, .. }) if key == "customers"));
    }

    #[test]
    fn test_clear() {
        let cache = store(Arc::new(MemoryStorage::new()));
        cache.save(&[Customer::new(1u64, "Ada", "Lovelace")]);
        cache.clear().unwrap();
        assert!(cache.load().is_empty());
    }
}
