//! Tool runner and result store ports
//!
//! Both ports expose `provider_name` for diagnostics and `to_value` so the
//! owning context can serialize itself recursively: the context's own
//! serialization calls each resolved dependency's `to_value`.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::value_objects::{StoredResult, ToolOutcome};

/// Port for tool execution backends
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run the named tool and return its outcome
    ///
    /// # Errors
    /// Returns [`Error::Tool`](crate::error::Error::Tool) when the tool is
    /// unknown to the backend or the run itself fails. The error is expected
    /// to travel to the caller unchanged.
    async fn run_tool(&self, tool: &str) -> Result<ToolOutcome>;

    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;

    /// Serialize the runner's observable state
    fn to_value(&self) -> Value;
}

/// Port for result persistence backends
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist a tool outcome, assigning it a store identifier
    async fn save_result(&self, outcome: &ToolOutcome) -> Result<StoredResult>;

    /// Number of results currently held
    async fn len(&self) -> usize;

    /// Whether the store currently holds no results
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;

    /// Serialize the store's observable state
    fn to_value(&self) -> Value;
}
