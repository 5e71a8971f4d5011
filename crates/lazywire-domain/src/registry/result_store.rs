//! Result Store Provider Registry
//!
//! Auto-registration system for result store providers using linkme
//! distributed slices. Follows the same pattern as
//! [`tool_runner`](crate::registry::tool_runner).

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::ResultStore;

/// Configuration for result store provider creation
#[derive(Debug, Clone, Default)]
pub struct StoreProviderConfig {
    /// Provider name (e.g., "memory", "null")
    pub provider: String,
    /// Maximum number of results to retain, for bounded stores
    pub capacity: Option<usize>,
    /// Namespace for stored results
    pub namespace: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl StoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the retention capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for result store providers
pub struct StoreProviderEntry {
    /// Unique provider name (e.g., "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&StoreProviderConfig) -> Result<Arc<dyn ResultStore>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static STORE_PROVIDERS: [StoreProviderEntry] = [..];

/// Resolve result store provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn ResultStore>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_result_store(config: &StoreProviderConfig) -> Result<Arc<dyn ResultStore>, String> {
    let provider_name = &config.provider;

    for entry in STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown store provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered result store providers
pub fn list_store_providers() -> Vec<(&'static str, &'static str)> {
    STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
