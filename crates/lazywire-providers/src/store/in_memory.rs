//! In-memory result store provider implementation
//!
//! Holds results in memory for development and testing. Data is not
//! persisted and will be lost on drop. Optionally bounded: when a capacity
//! is configured, saves beyond it are rejected rather than evicted.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use lazywire_domain::error::{Error, Result};
use lazywire_domain::ports::ResultStore;
use lazywire_domain::registry::{StoreProviderConfig, StoreProviderEntry, STORE_PROVIDERS};
use lazywire_domain::value_objects::{StoredResult, ToolOutcome};

/// Result store backed by an in-memory vector
pub struct InMemoryResultStore {
    results: RwLock<Vec<StoredResult>>,
    capacity: Option<usize>,
}

impl InMemoryResultStore {
    /// Create an unbounded in-memory store
    pub fn new() -> Self {
        Self {
            results: RwLock::new(Vec::new()),
            capacity: None,
        }
    }

    /// Create a store from provider config
    pub fn from_config(config: &StoreProviderConfig) -> Self {
        Self {
            results: RwLock::new(Vec::new()),
            capacity: config.capacity,
        }
    }

    /// Snapshot of everything currently stored
    pub fn results(&self) -> Vec<StoredResult> {
        self.results.read().expect("results lock poisoned").clone()
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save_result(&self, outcome: &ToolOutcome) -> Result<StoredResult> {
        let mut results = self.results.write().expect("results lock poisoned");

        if let Some(capacity) = self.capacity {
            if results.len() >= capacity {
                return Err(Error::store(format!(
                    "Store capacity of {capacity} results exhausted"
                )));
            }
        }

        let stored = StoredResult {
            id: Uuid::new_v4().to_string(),
            outcome: outcome.clone(),
        };
        results.push(stored.clone());
        Ok(stored)
    }

    async fn len(&self) -> usize {
        self.results.read().expect("results lock poisoned").len()
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }

    fn to_value(&self) -> Value {
        let count = self.results.read().expect("results lock poisoned").len();
        serde_json::json!({
            "provider": self.provider_name(),
            "results": count,
        })
    }
}

/// Factory function for registry registration
fn in_memory_store_factory(
    config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn ResultStore>, String> {
    Ok(Arc::new(InMemoryResultStore::from_config(config)))
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static MEMORY_PROVIDER: StoreProviderEntry = StoreProviderEntry {
    name: "memory",
    description: "In-memory result store (fast, non-persistent)",
    factory: in_memory_store_factory,
};
