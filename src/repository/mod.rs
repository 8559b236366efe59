pub mod cache_store;
pub mod customer_repository;
pub mod storage;

use crate::config::AppConfig;
use cache_store::CacheStore;
use customer_repository::CustomerRepository;
use std::sync::Arc;
use storage::StorageBackend;

#[derive(Clone)]
pub struct Repository {
    pub customers: CustomerRepository,
    pub cache: CacheStore,
}

impl Repository {
    pub fn new(config: &AppConfig, backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            customers: CustomerRepository::new(config.endpoint.clone()),
            cache: CacheStore::new(backend, config.storage_key.clone()),
        }
    }

    /// Storage slot for the current platform: `localStorage` in the browser,
    /// a JSON file under `cache_dir` on desktop, memory otherwise.
    pub fn for_platform(config: &AppConfig) -> Self {
        Self::new(config, platform_storage(config))
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_storage(_config: &AppConfig) -> Arc<dyn StorageBackend> {
    Arc::new(storage::BrowserStorage)
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_storage(config: &AppConfig) -> Arc<dyn StorageBackend> {
    match &config.cache_dir {
        Some(dir) => Arc::new(storage::FileStorage::new(dir.clone())),
        None => Arc::new(storage::MemoryStorage::new()),
    }
}
