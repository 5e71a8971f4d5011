//! Service resolver
//!
//! Bridges configuration and the linkme provider registry. The resolver has
//! no knowledge of concrete provider implementations; it turns the provider
//! names carried in [`AppConfig`] into registry lookups at the moment a slot
//! first needs a value.
//!
//! ## Pattern
//!
//! ```text
//! AppConfig → ServiceResolver → linkme registry → Arc<dyn Service>
//! ```

use std::sync::Arc;

use lazywire_domain::error::{Error, Result};
use lazywire_domain::ports::{ResultStore, ToolRunner};
use lazywire_domain::registry::{
    list_store_providers, list_tool_providers, resolve_result_store, resolve_tool_runner,
    StoreProviderConfig, ToolProviderConfig,
};

use crate::config::AppConfig;

/// Resolver component for the context's service slots
///
/// Resolution is by name at call time, never at construction time - creating
/// a resolver constructs nothing.
pub struct ServiceResolver {
    config: Arc<AppConfig>,
}

impl ServiceResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve a tool runner from current application config
    pub fn resolve_tool_runner(&self) -> Result<Arc<dyn ToolRunner>> {
        let registry_config = self.config.providers.tools.to_registry();
        resolve_tool_runner(&registry_config).map_err(Error::provider)
    }

    /// Resolve a tool runner from an override config
    pub fn resolve_tool_override(
        &self,
        override_config: &ToolProviderConfig,
    ) -> Result<Arc<dyn ToolRunner>> {
        resolve_tool_runner(override_config).map_err(Error::provider)
    }

    /// Resolve a result store from current application config
    pub fn resolve_result_store(&self) -> Result<Arc<dyn ResultStore>> {
        let registry_config = self.config.providers.store.to_registry();
        resolve_result_store(&registry_config).map_err(Error::provider)
    }

    /// Resolve a result store from an override config
    pub fn resolve_store_override(
        &self,
        override_config: &StoreProviderConfig,
    ) -> Result<Arc<dyn ResultStore>> {
        resolve_result_store(override_config).map_err(Error::provider)
    }
}

impl std::fmt::Debug for ServiceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceResolver").finish()
    }
}

/// List all available providers across all categories
///
/// Useful for diagnostics and configuration validation.
pub fn list_available_services() -> AvailableServices {
    AvailableServices {
        tools: list_tool_providers(),
        stores: list_store_providers(),
    }
}

/// Available providers by category
#[derive(Debug, Clone)]
pub struct AvailableServices {
    /// Available tool runner providers (name, description)
    pub tools: Vec<(&'static str, &'static str)>,
    /// Available result store providers (name, description)
    pub stores: Vec<(&'static str, &'static str)>,
}

impl std::fmt::Display for AvailableServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Available Providers:")?;
        writeln!(f)?;

        writeln!(f, "Tool Runner Providers:")?;
        for (name, desc) in &self.tools {
            writeln!(f, "  - {}: {}", name, desc)?;
        }
        writeln!(f)?;

        writeln!(f, "Result Store Providers:")?;
        for (name, desc) in &self.stores {
            writeln!(f, "  - {}: {}", name, desc)?;
        }

        Ok(())
    }
}
