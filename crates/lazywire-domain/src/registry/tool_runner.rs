//! Tool Runner Provider Registry
//!
//! Auto-registration system for tool runner providers using linkme
//! distributed slices. Providers register themselves via
//! `#[linkme::distributed_slice(TOOL_PROVIDERS)]` and are discovered at
//! runtime.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::ToolRunner;

/// Configuration for tool runner provider creation
///
/// Contains all configuration options a tool runner might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ToolProviderConfig {
    /// Provider name (e.g., "static", "null")
    pub provider: String,
    /// Tool names the runner should declare, for providers with a fixed table
    pub tools: Vec<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ToolProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add a declared tool
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tools.push(tool.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for tool runner providers
///
/// Each tool runner implementation registers itself with this entry using
/// `#[linkme::distributed_slice(TOOL_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create provider instances.
pub struct ToolProviderEntry {
    /// Unique provider name (e.g., "static", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ToolProviderConfig) -> Result<Arc<dyn ToolRunner>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static TOOL_PROVIDERS: [ToolProviderEntry] = [..];

/// Resolve tool runner provider by name from registry
///
/// Searches the registry for a provider matching the configured name and
/// creates an instance using the provider's factory function. The lookup
/// happens at call time, which is what defers construction to first use.
///
/// # Returns
/// * `Ok(Arc<dyn ToolRunner>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_tool_runner(config: &ToolProviderConfig) -> Result<Arc<dyn ToolRunner>, String> {
    let provider_name = &config.provider;

    for entry in TOOL_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = TOOL_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown tool provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered tool runner providers
///
/// Returns a list of (name, description) tuples. Useful for diagnostics
/// and configuration validation.
pub fn list_tool_providers() -> Vec<(&'static str, &'static str)> {
    TOOL_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
