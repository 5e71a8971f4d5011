//! Unit tests for the owning service context
//!
//! Exercises lazy resolution through the registry, injection (typed and
//! name-dispatched), validation, serialization and error propagation through
//! the composite operation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use lazywire::{
    build_context, AppConfig, Error, ResultStore, ServiceContext, ServiceInstance, ToolRunner,
};
use lazywire_domain::error::Result;
use lazywire_domain::value_objects::{StoredResult, ToolOutcome};

// ============================================================================
// Test doubles
// ============================================================================

/// Tool runner that counts its calls and can be told to fail
struct MockToolRunner {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl MockToolRunner {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_with: None,
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolRunner for MockToolRunner {
    async fn run_tool(&self, tool: &str) -> Result<ToolOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(Error::tool(message.clone())),
            None => Ok(ToolOutcome::new(tool, "result_from_mock_runner")),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-runner"
    }

    fn to_value(&self) -> Value {
        json!({"mock_runner_data": "value"})
    }
}

/// Result store that counts its calls
struct MockResultStore {
    calls: AtomicUsize,
}

impl MockResultStore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResultStore for MockResultStore {
    async fn save_result(&self, outcome: &ToolOutcome) -> Result<StoredResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(StoredResult {
            id: "mock-id".to_string(),
            outcome: outcome.clone(),
        })
    }

    async fn len(&self) -> usize {
        self.calls()
    }

    fn provider_name(&self) -> &'static str {
        "mock-store"
    }

    fn to_value(&self) -> Value {
        json!({"mock_store_data": "value"})
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn example_context() -> ServiceContext {
    let mut config = AppConfig::default();
    config.context.name = "example_value".to_string();
    config.context.max_results = 42;
    build_context(config)
}

fn valid_payload() -> Value {
    json!({"id": "123", "value": 10})
}

// ============================================================================
// Construction and lazy resolution
// ============================================================================

#[tokio::test]
async fn test_slots_empty_after_construction() {
    let context = example_context();

    assert_eq!(context.name(), "example_value");
    assert_eq!(context.max_results(), 42);
    assert!(!context.slot_resolved("tools").await.unwrap());
    assert!(!context.slot_resolved("store").await.unwrap());
}

#[tokio::test]
async fn test_slot_resolved_rejects_unknown_name() {
    let context = example_context();
    let err = context
        .slot_resolved("invalid_class")
        .await
        .expect_err("undeclared slot");
    assert!(err.to_string().contains("'invalid_class'"));
}

#[tokio::test]
async fn test_repeated_access_returns_cached_instance() {
    let context = example_context();

    let first = context.tool_runner().await.unwrap();
    assert!(context.slot_resolved("tools").await.unwrap());

    let second = context.tool_runner().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.provider_name(), "static");
}

#[tokio::test]
async fn test_unknown_provider_name_propagates() {
    let mut config = AppConfig::default();
    config.providers.tools.provider = "no-such-provider".to_string();
    let context = build_context(config);

    let err = context
        .tool_runner()
        .await
        .err()
        .expect("unknown provider must not resolve");
    assert!(matches!(err, Error::Provider { .. }));
    assert!(err.to_string().contains("no-such-provider"));
    // The failed lookup must not mark the slot resolved
    assert!(!context.slot_resolved("tools").await.unwrap());
}

// ============================================================================
// Injection
// ============================================================================

#[tokio::test]
async fn test_injected_instance_bypasses_factory() {
    let context = example_context();
    let mock = MockToolRunner::succeeding();

    context.inject_tool_runner(mock.clone()).await;

    let resolved = context.tool_runner().await.unwrap();
    assert_eq!(resolved.provider_name(), "mock-runner");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_inject_by_name_into_declared_slots() {
    let context = example_context();

    context
        .inject("tools", ServiceInstance::ToolRunner(MockToolRunner::succeeding()))
        .await
        .unwrap();
    context
        .inject("store", ServiceInstance::ResultStore(MockResultStore::new()))
        .await
        .unwrap();

    assert!(context.slot_resolved("tools").await.unwrap());
    assert!(context.slot_resolved("store").await.unwrap());
}

#[tokio::test]
async fn test_inject_unknown_slot_fails() {
    let context = example_context();

    let err = context
        .inject(
            "unknown",
            ServiceInstance::ToolRunner(MockToolRunner::succeeding()),
        )
        .await
        .expect_err("undeclared slot");

    assert!(matches!(err, Error::UnknownSlot { .. }));
    let message = err.to_string();
    assert!(message.contains("'unknown'"));
    assert!(message.contains("tools"));
    assert!(message.contains("store"));
}

#[tokio::test]
async fn test_inject_category_mismatch_fails() {
    let context = example_context();

    let err = context
        .inject(
            "store",
            ServiceInstance::ToolRunner(MockToolRunner::succeeding()),
        )
        .await
        .expect_err("category mismatch");

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("'store'"));
}

// ============================================================================
// Composite operation
// ============================================================================

#[tokio::test]
async fn test_run_and_store_with_default_providers() {
    let context = example_context();

    let stored = context
        .run_and_store("example_tool", &valid_payload())
        .await
        .unwrap();

    assert_eq!(stored.outcome.tool, "example_tool");
    assert_eq!(stored.outcome.output, "result_from_example_tool");
    assert!(!stored.id.is_empty());

    let store = context.result_store().await.unwrap();
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_run_and_store_invokes_both_dependencies_once() {
    let context = example_context();
    let runner = MockToolRunner::succeeding();
    let store = MockResultStore::new();

    context.inject_tool_runner(runner.clone()).await;
    context.inject_result_store(store.clone()).await;

    let stored = context
        .run_and_store("example_tool", &valid_payload())
        .await
        .unwrap();

    assert_eq!(runner.calls(), 1);
    assert_eq!(store.calls(), 1);
    assert_eq!(stored.id, "mock-id");
    assert_eq!(stored.outcome.output, "result_from_mock_runner");
}

#[tokio::test]
async fn test_invalid_payload_fails_before_resolution() {
    let context = example_context();

    let err = context
        .run_and_store("example_tool", &json!({"id": "123", "value": "not_an_int"}))
        .await
        .expect_err("payload must not validate");

    assert!(matches!(err, Error::Validation { ref schema, .. } if schema == "ToolRequest"));
    assert!(err.to_string().contains("ToolRequest"));
    // Validation happens before any deferred lookup
    assert!(!context.slot_resolved("tools").await.unwrap());
    assert!(!context.slot_resolved("store").await.unwrap());
}

#[tokio::test]
async fn test_dependency_failure_propagates_unchanged() {
    let context = example_context();
    let runner = MockToolRunner::failing("Error in mock runner");
    let store = MockResultStore::new();

    context.inject_tool_runner(runner.clone()).await;
    context.inject_result_store(store.clone()).await;

    let err = context
        .run_and_store("example_tool", &valid_payload())
        .await
        .expect_err("tool failure must propagate");

    assert!(err.to_string().contains("Error in mock runner"));
    // The store is never reached after the runner fails
    assert_eq!(store.calls(), 0);
}

// ============================================================================
// Serialization
// ============================================================================

#[tokio::test]
async fn test_to_value_includes_params_and_dependencies() {
    let context = example_context();
    context.inject_tool_runner(MockToolRunner::succeeding()).await;
    context.inject_result_store(MockResultStore::new()).await;

    let value = context.to_value().await.unwrap();

    assert_eq!(
        value,
        json!({
            "name": "example_value",
            "max_results": 42,
            "tools": {"mock_runner_data": "value"},
            "store": {"mock_store_data": "value"},
        })
    );
}

#[tokio::test]
async fn test_to_value_forces_resolution() {
    let context = example_context();
    assert!(!context.slot_resolved("tools").await.unwrap());

    let value = context.to_value().await.unwrap();

    assert!(context.slot_resolved("tools").await.unwrap());
    assert!(context.slot_resolved("store").await.unwrap());
    assert_eq!(value["tools"]["provider"], "static");
    assert_eq!(value["store"]["provider"], "memory");
}

// ============================================================================
// Formatting
// ============================================================================

#[tokio::test]
async fn test_display_and_debug() {
    let context = example_context();

    assert_eq!(
        context.to_string(),
        "ServiceContext 'example_value' (max_results=42)"
    );
    let debug = format!("{context:?}");
    assert!(debug.contains("example_value"));
    assert!(debug.contains("42"));
}
