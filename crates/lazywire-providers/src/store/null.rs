//! Null result store provider implementation
//!
//! Discards everything it is given. Useful when persistence is irrelevant.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use lazywire_domain::error::Result;
use lazywire_domain::ports::ResultStore;
use lazywire_domain::registry::{StoreProviderConfig, StoreProviderEntry, STORE_PROVIDERS};
use lazywire_domain::value_objects::{StoredResult, ToolOutcome};

/// Result store that stores nothing
#[derive(Debug, Default)]
pub struct NullResultStore;

impl NullResultStore {
    /// Create a new null result store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultStore for NullResultStore {
    async fn save_result(&self, outcome: &ToolOutcome) -> Result<StoredResult> {
        // The caller still gets a well-formed result, it is just not retained
        Ok(StoredResult {
            id: Uuid::new_v4().to_string(),
            outcome: outcome.clone(),
        })
    }

    async fn len(&self) -> usize {
        0
    }

    fn provider_name(&self) -> &'static str {
        "null"
    }

    fn to_value(&self) -> Value {
        serde_json::json!({ "provider": self.provider_name() })
    }
}

/// Factory function for registry registration
fn null_store_factory(
    _config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn ResultStore>, String> {
    Ok(Arc::new(NullResultStore::new()))
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static NULL_PROVIDER: StoreProviderEntry = StoreProviderEntry {
    name: "null",
    description: "Discards results, retains nothing",
    factory: null_store_factory,
};
