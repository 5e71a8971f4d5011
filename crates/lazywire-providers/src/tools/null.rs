//! Null tool runner provider implementation
//!
//! Accepts any tool name and produces empty output. Useful for wiring a
//! context where tool execution is irrelevant.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use lazywire_domain::error::Result;
use lazywire_domain::ports::ToolRunner;
use lazywire_domain::registry::{ToolProviderConfig, ToolProviderEntry, TOOL_PROVIDERS};
use lazywire_domain::value_objects::ToolOutcome;

/// Tool runner that runs nothing
#[derive(Debug, Default)]
pub struct NullToolRunner;

impl NullToolRunner {
    /// Create a new null tool runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for NullToolRunner {
    async fn run_tool(&self, tool: &str) -> Result<ToolOutcome> {
        Ok(ToolOutcome::new(tool, String::new()))
    }

    fn provider_name(&self) -> &'static str {
        "null"
    }

    fn to_value(&self) -> Value {
        serde_json::json!({ "provider": self.provider_name() })
    }
}

/// Factory function for registry registration
fn null_tool_runner_factory(
    _config: &ToolProviderConfig,
) -> std::result::Result<Arc<dyn ToolRunner>, String> {
    Ok(Arc::new(NullToolRunner::new()))
}

#[linkme::distributed_slice(TOOL_PROVIDERS)]
static NULL_PROVIDER: ToolProviderEntry = ToolProviderEntry {
    name: "null",
    description: "Accepts any tool, produces empty output",
    factory: null_tool_runner_factory,
};
