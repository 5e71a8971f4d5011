//! Provider registry
//!
//! Auto-registration system for service providers using linkme distributed
//! slices. Providers register themselves via `#[linkme::distributed_slice]`
//! and are discovered at runtime, by name, at the moment a slot is first
//! read - never at definition time. This deferred, name-based lookup is the
//! mechanism that keeps provider crates and the container crate free of
//! mutual imports.

pub mod result_store;
pub mod tool_runner;

pub use result_store::{
    StoreProviderConfig, StoreProviderEntry, STORE_PROVIDERS, list_store_providers,
    resolve_result_store,
};
pub use tool_runner::{
    ToolProviderConfig, ToolProviderEntry, TOOL_PROVIDERS, list_tool_providers,
    resolve_tool_runner,
};
