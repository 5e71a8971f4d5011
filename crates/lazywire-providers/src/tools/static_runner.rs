//! Static tool runner provider implementation
//!
//! Runs tools from a fixed table declared at construction time. Output is
//! deterministic, which makes this the default provider for development and
//! the reference backend in tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use lazywire_domain::error::{Error, Result};
use lazywire_domain::ports::ToolRunner;
use lazywire_domain::registry::{ToolProviderConfig, ToolProviderEntry, TOOL_PROVIDERS};
use lazywire_domain::value_objects::ToolOutcome;

/// Default tool table when the config declares none
const DEFAULT_TOOLS: &[&str] = &["example_tool"];

/// Tool runner with a fixed tool table
pub struct StaticToolRunner {
    tools: Vec<String>,
}

impl StaticToolRunner {
    /// Create a runner declaring the given tools
    pub fn new(tools: Vec<String>) -> Self {
        Self { tools }
    }

    /// Create a runner from provider config, falling back to the default table
    pub fn from_config(config: &ToolProviderConfig) -> Self {
        if config.tools.is_empty() {
            Self::new(DEFAULT_TOOLS.iter().map(ToString::to_string).collect())
        } else {
            Self::new(config.tools.clone())
        }
    }
}

impl Default for StaticToolRunner {
    fn default() -> Self {
        Self::from_config(&ToolProviderConfig::default())
    }
}

#[async_trait]
impl ToolRunner for StaticToolRunner {
    async fn run_tool(&self, tool: &str) -> Result<ToolOutcome> {
        if !self.tools.iter().any(|t| t == tool) {
            return Err(Error::tool(format!(
                "Tool '{}' is not declared. Declared tools: {:?}",
                tool, self.tools
            )));
        }

        Ok(ToolOutcome::new(tool, format!("result_from_{tool}")))
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }

    fn to_value(&self) -> Value {
        serde_json::json!({
            "provider": self.provider_name(),
            "tools": self.tools,
        })
    }
}

/// Factory function for registry registration
fn static_tool_runner_factory(
    config: &ToolProviderConfig,
) -> std::result::Result<Arc<dyn ToolRunner>, String> {
    Ok(Arc::new(StaticToolRunner::from_config(config)))
}

#[linkme::distributed_slice(TOOL_PROVIDERS)]
static STATIC_PROVIDER: ToolProviderEntry = ToolProviderEntry {
    name: "static",
    description: "Fixed tool table with deterministic output",
    factory: static_tool_runner_factory,
};
