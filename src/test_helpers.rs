// Test helpers for integration testing

use crate::config::AppConfig;
use crate::domain::customer::{Address, Customer};
use crate::repository::cache_store::CacheStore;
use crate::repository::customer_repository::CustomerSource;
use crate::repository::storage::MemoryStorage;
use crate::services::{CustomerStore, ListController};
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// `n` customers with ids `1..=n`, in order.
pub fn sample_customers(n: u64) -> Vec<Customer> {
    (1..=n)
        .map(|i| {
            let mut customer = Customer::new(i, format!("First{i}"), format!("Last{i}"));
            customer.email = format!("customer{i}@example.com");
            customer.gender = if i % 2 == 0 { "female" } else { "male" }.to_string();
            customer.address = Address {
                country: "Nigeria".to_string(),
                city: "Lagos".to_string(),
                street: format!("{i} Marina Road"),
            };
            customer
        })
        .collect()
}

/// Customer source that replays queued results and counts calls.
#[derive(Default)]
pub struct StubSource {
    responses: Mutex<VecDeque<Result<Vec<Customer>>>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(customers: Vec<Customer>) -> Self {
        let source = Self::new();
        source.push_ok(customers);
        source
    }

    pub fn push_ok(&self, customers: Vec<Customer>) {
        self.responses.lock().push_back(Ok(customers));
    }

    pub fn push_err(&self, message: &str) {
        self.responses.lock().push_back(Err(anyhow::anyhow!(message.to_string())));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CustomerSource for StubSource {
    async fn fetch_batch(&self, _quantity: u32) -> Result<Vec<Customer>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no stubbed response left")))
    }
}

pub struct TestContext {
    pub config: AppConfig,
    pub backend: Arc<MemoryStorage>,
    pub store: CustomerStore,
}

impl TestContext {
    pub fn new_for_test() -> Self {
        Self::with_backend(Arc::new(MemoryStorage::new()))
    }

    /// A fresh session over an existing storage slot, like a page reload.
    pub fn with_backend(backend: Arc<MemoryStorage>) -> Self {
        let config = AppConfig::default();
        let cache = CacheStore::new(backend.clone(), config.storage_key.clone());
        let store = CustomerStore::load(cache);
        Self { config, backend, store }
    }

    pub fn list_controller(&self) -> ListController {
        ListController::new(self.store.clone(), &self.config)
    }

    pub fn cache(&self) -> CacheStore {
        CacheStore::new(self.backend.clone(), self.config.storage_key.clone())
    }
}
