//! Owning service context
//!
//! [`ServiceContext`] is the owning object of the lazy-slot pattern: a fixed
//! set of immutable parameters plus the declared slots `"tools"` and
//! `"store"`. Slots start empty and resolve on first access through the
//! [`ServiceResolver`]; injection can place or replace a slot's value at any
//! time, which is how tests wire mocks without touching the registry.
//!
//! Errors raised by a resolved dependency inside a composite operation are
//! logged at error severity and re-raised unchanged - the context never
//! wraps or swallows them.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use lazywire_domain::constants::{DECLARED_SLOTS, SLOT_STORE, SLOT_TOOLS};
use lazywire_domain::error::{Error, Result};
use lazywire_domain::ports::{ResultStore, ToolRunner};
use lazywire_domain::value_objects::{StoredResult, ToolRequest};

use crate::resolver::ServiceResolver;
use crate::slot::SlotCell;

/// Immutable parameters of a service context
///
/// Set exactly once at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextParams {
    /// Context name, included in serialized output
    pub name: String,
    /// Upper bound the context advertises for result retention
    pub max_results: u64,
}

/// A service instance for explicit injection into a named slot
///
/// One variant per declared slot category. Injection checks that the
/// addressed slot and the instance's category agree.
pub enum ServiceInstance {
    /// An instance for the `"tools"` slot
    ToolRunner(Arc<dyn ToolRunner>),
    /// An instance for the `"store"` slot
    ResultStore(Arc<dyn ResultStore>),
}

/// Owning object with lazily-resolved, named dependency slots
pub struct ServiceContext {
    params: ContextParams,
    resolver: ServiceResolver,
    tools: SlotCell<dyn ToolRunner>,
    store: SlotCell<dyn ResultStore>,
}

impl ServiceContext {
    /// Create a context with empty slots
    ///
    /// Nothing is resolved here; the declared-slot set is fixed from this
    /// point on and each slot fills on first access.
    pub fn new(params: ContextParams, resolver: ServiceResolver) -> Self {
        Self {
            params,
            resolver,
            tools: SlotCell::empty(SLOT_TOOLS),
            store: SlotCell::empty(SLOT_STORE),
        }
    }

    /// Context name
    pub fn name(&self) -> &str {
        &self.params.name
    }

    /// Advertised result retention bound
    pub fn max_results(&self) -> u64 {
        self.params.max_results
    }

    /// Whether the named slot currently holds a value
    ///
    /// Introspection only - never triggers resolution.
    pub async fn slot_resolved(&self, slot: &str) -> Result<bool> {
        match slot {
            s if s == SLOT_TOOLS => Ok(self.tools.is_resolved().await),
            s if s == SLOT_STORE => Ok(self.store.is_resolved().await),
            other => Err(Error::unknown_slot(other, DECLARED_SLOTS)),
        }
    }

    /// Tool runner, resolved lazily on first access
    pub async fn tool_runner(&self) -> Result<Arc<dyn ToolRunner>> {
        self.tools
            .get_or_try_init(|| self.resolver.resolve_tool_runner())
            .await
    }

    /// Result store, resolved lazily on first access
    pub async fn result_store(&self) -> Result<Arc<dyn ResultStore>> {
        self.store
            .get_or_try_init(|| self.resolver.resolve_result_store())
            .await
    }

    /// Inject a service into a named slot, bypassing lazy construction
    ///
    /// Fails with [`Error::UnknownSlot`] when `slot` was never declared, and
    /// with a configuration error when the slot exists but cannot hold the
    /// instance's category.
    pub async fn inject(&self, slot: &str, instance: ServiceInstance) -> Result<()> {
        match instance {
            ServiceInstance::ToolRunner(runner) if slot == SLOT_TOOLS => {
                self.tools.set(runner).await;
                Ok(())
            }
            ServiceInstance::ResultStore(store) if slot == SLOT_STORE => {
                self.store.set(store).await;
                Ok(())
            }
            _ if !DECLARED_SLOTS.iter().any(|s| *s == slot) => {
                Err(Error::unknown_slot(slot, DECLARED_SLOTS))
            }
            _ => Err(Error::configuration(format!(
                "Slot '{slot}' cannot hold a service of this category"
            ))),
        }
    }

    /// Inject a tool runner into the `"tools"` slot
    pub async fn inject_tool_runner(&self, runner: Arc<dyn ToolRunner>) {
        self.tools.set(runner).await;
    }

    /// Inject a result store into the `"store"` slot
    pub async fn inject_result_store(&self, store: Arc<dyn ResultStore>) {
        self.store.set(store).await;
    }

    /// Validate a payload, run the named tool and persist the outcome
    ///
    /// The composite operation of the context. Both slots resolve lazily on
    /// the way through. A failure in either resolved dependency is logged
    /// with the dependency's message and propagated unchanged.
    pub async fn run_and_store(&self, tool: &str, payload: &Value) -> Result<StoredResult> {
        let request = ToolRequest::from_value(payload)?;
        debug!(
            context = %self.params.name,
            request_id = %request.id,
            tool,
            "Running composite operation"
        );

        let runner = self.tool_runner().await?;
        let outcome = runner.run_tool(tool).await.map_err(|e| {
            error!("An error occurred in run_and_store: {e}");
            e
        })?;

        let store = self.result_store().await?;
        let stored = store.save_result(&outcome).await.map_err(|e| {
            error!("An error occurred in run_and_store: {e}");
            e
        })?;

        debug!(
            context = %self.params.name,
            result_id = %stored.id,
            "Composite operation succeeded"
        );
        Ok(stored)
    }

    /// Serialize the context: own parameters plus each dependency's own
    /// serialization
    ///
    /// Forces resolution of every slot, even when only serialization is
    /// wanted - a documented property of the pattern, not an accident.
    pub async fn to_value(&self) -> Result<Value> {
        let runner = self.tool_runner().await?;
        let store = self.result_store().await?;

        Ok(serde_json::json!({
            "name": self.params.name,
            "max_results": self.params.max_results,
            "tools": runner.to_value(),
            "store": store.to_value(),
        }))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("name", &self.params.name)
            .field("max_results", &self.params.max_results)
            .finish()
    }
}

impl std::fmt::Display for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ServiceContext '{}' (max_results={})",
            self.params.name, self.params.max_results
        )
    }
}
