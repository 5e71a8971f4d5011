//! Configuration types
//!
//! Serde-typed application configuration with defaults. Loading and layering
//! (defaults → TOML file → environment) is handled by
//! [`loader::ConfigLoader`].

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

use lazywire_domain::constants::{DEFAULT_STORE_PROVIDER, DEFAULT_TOOL_PROVIDER};
use lazywire_domain::registry::{StoreProviderConfig, ToolProviderConfig};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Owning context parameters
    pub context: ContextConfig,
    /// Provider selection per slot
    pub providers: ProvidersConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Parameters of the owning service context
///
/// These become the context's immutable parameters - set exactly once at
/// construction, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Context name, included in serialized output
    pub name: String,
    /// Upper bound the context advertises for result retention
    pub max_results: u64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            name: "lazywire".to_string(),
            max_results: 16,
        }
    }
}

/// Provider names and settings for each declared slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    /// Tool runner slot configuration
    pub tools: ToolsConfig,
    /// Result store slot configuration
    pub store: StoreConfig,
}

/// Configuration for the tool runner slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Provider name resolved in the registry (e.g., "static", "null")
    pub provider: String,
    /// Declared tool table for providers that use one
    pub tools: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_TOOL_PROVIDER.to_string(),
            tools: Vec::new(),
        }
    }
}

impl ToolsConfig {
    /// Convert to the registry-level provider config
    pub fn to_registry(&self) -> ToolProviderConfig {
        ToolProviderConfig {
            provider: self.provider.clone(),
            tools: self.tools.clone(),
            extra: Default::default(),
        }
    }
}

/// Configuration for the result store slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Provider name resolved in the registry (e.g., "memory", "null")
    pub provider: String,
    /// Retention capacity for bounded stores
    pub capacity: Option<usize>,
    /// Namespace for stored results
    pub namespace: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            capacity: None,
            namespace: None,
        }
    }
}

impl StoreConfig {
    /// Convert to the registry-level provider config
    pub fn to_registry(&self) -> StoreProviderConfig {
        StoreProviderConfig {
            provider: self.provider.clone(),
            capacity: self.capacity,
            namespace: self.namespace.clone(),
            extra: Default::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
